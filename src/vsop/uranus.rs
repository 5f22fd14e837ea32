// Truncated VSOP87D series for Uranus.
// Amplitudes are in 1e-8 rad (longitude, latitude) and 1e-8 AU (radius),
// phases in radians, frequencies in radians per Julian millennium.

use super::{VsopModel, VsopTerm};

const L0: &[VsopTerm] = &[
    [548129294.0, 0.0, 0.0],
    [9260408.0, 0.8910642, 74.7815986],
    [1504248.0, 3.6271926, 1.4844727],
    [365982.0, 1.899622, 73.297126],
    [272328.0, 3.358237, 149.563197],
    [70328.0, 5.39254, 63.7359],
    [68893.0, 6.09292, 76.26607],
    [61999.0, 2.26952, 2.96895],
    [61951.0, 2.85099, 11.0457],
    [26469.0, 3.14152, 71.81265],
    [25711.0, 6.1138, 454.90937],
    [21079.0, 4.36059, 148.07872],
    [17819.0, 1.74437, 36.64856],
    [14613.0, 4.73732, 3.93215],
    [11163.0, 5.82682, 224.3448],
    [10998.0, 0.48865, 138.5175],
    [9527.0, 2.9552, 35.1641],
    [7546.0, 5.2363, 109.9457],
    [4220.0, 3.2333, 70.8494],
    [4052.0, 2.2775, 151.0477],
    [3490.0, 5.4831, 146.5943],
    [3355.0, 1.0655, 4.4534],
    [3144.0, 4.752, 77.7505],
    [2927.0, 4.629, 9.5612],
    [2922.0, 5.3524, 85.8273],
    [2273.0, 4.366, 70.3282],
    [2149.0, 0.6075, 38.133],
    [2051.0, 1.5177, 0.1119],
    [1992.0, 4.9244, 277.035],
    [1667.0, 3.6274, 380.1278],
    [1533.0, 2.5859, 52.6902],
    [1376.0, 2.0428, 65.2204],
    [1372.0, 4.1964, 111.4302],
    [1284.0, 3.1135, 202.2534],
    [1282.0, 0.5427, 222.8603],
    [1244.0, 0.9161, 2.4477],
    [1221.0, 0.199, 108.4612],
    [1151.0, 4.179, 33.6796],
    [1150.0, 0.9334, 3.1814],
    [1090.0, 1.775, 12.5302],
    [1072.0, 0.2356, 62.2514],
    [946.0, 1.192, 127.472],
    [708.0, 5.183, 213.299],
    [653.0, 0.966, 78.714],
    [628.0, 0.182, 984.6],
    [607.0, 5.432, 529.691],
    [559.0, 3.358, 0.521],
    [524.0, 2.013, 299.126],
    [483.0, 2.106, 0.963],
    [471.0, 1.407, 184.727],
    [467.0, 0.415, 145.11],
    [434.0, 5.521, 183.243],
    [405.0, 5.987, 8.077],
    [399.0, 0.338, 415.552],
    [396.0, 5.87, 351.817],
    [379.0, 2.35, 56.622],
    [310.0, 5.833, 145.631],
    [300.0, 5.644, 22.091],
    [294.0, 5.839, 39.618],
    [252.0, 1.637, 221.376],
    [249.0, 4.746, 225.829],
    [239.0, 2.35, 137.033],
    [224.0, 0.516, 84.343],
    [223.0, 2.843, 0.261],
    [220.0, 1.922, 67.668],
    [217.0, 6.142, 5.938],
    [216.0, 4.778, 340.771],
    [208.0, 5.58, 68.844],
    [202.0, 1.297, 0.048],
    [199.0, 0.956, 152.532],
    [194.0, 1.888, 456.394],
    [193.0, 0.916, 453.425],
    [187.0, 1.319, 0.16],
    [182.0, 3.536, 79.235],
    [173.0, 1.539, 160.609],
    [172.0, 5.68, 219.891],
    [170.0, 3.677, 5.417],
    [169.0, 5.879, 18.159],
    [165.0, 1.424, 106.977],
    [163.0, 3.05, 112.915],
    [158.0, 0.738, 54.175],
    [147.0, 1.263, 59.804],
    [143.0, 1.3, 35.425],
    [139.0, 5.386, 32.195],
    [139.0, 4.26, 909.819],
    [124.0, 1.374, 7.114],
    [110.0, 2.027, 554.07],
    [109.0, 5.706, 77.963],
    [104.0, 5.028, 0.751],
    [104.0, 1.458, 24.379],
    [103.0, 0.681, 14.978],
];

const L1: &[VsopTerm] = &[
    [7502543122.0, 0.0, 0.0],
    [154458.0, 5.242017, 74.781599],
    [24456.0, 1.71256, 1.48447],
    [9258.0, 0.4284, 11.0457],
    [8266.0, 1.5022, 63.7359],
    [7842.0, 1.3198, 149.5632],
    [3899.0, 0.4648, 3.9322],
    [2284.0, 4.1737, 76.2661],
    [1927.0, 0.5301, 2.9689],
    [1233.0, 1.5863, 70.8494],
    [791.0, 5.436, 3.181],
    [767.0, 1.996, 73.297],
    [482.0, 2.984, 85.827],
    [450.0, 4.138, 138.517],
    [446.0, 3.723, 224.345],
    [427.0, 4.731, 71.813],
    [354.0, 2.583, 148.079],
    [348.0, 2.454, 9.561],
    [317.0, 5.579, 52.69],
    [206.0, 2.363, 2.448],
    [189.0, 4.202, 56.622],
    [184.0, 0.284, 151.048],
    [180.0, 5.684, 12.53],
    [171.0, 3.001, 78.714],
    [158.0, 2.909, 0.963],
    [155.0, 5.591, 4.453],
    [154.0, 4.652, 35.164],
    [152.0, 2.942, 77.751],
    [143.0, 2.59, 62.251],
    [121.0, 4.148, 127.472],
    [116.0, 3.732, 65.22],
    [102.0, 4.188, 145.631],
    [102.0, 6.034, 0.112],
    [88.0, 3.99, 18.16],
    [88.0, 6.16, 202.25],
    [81.0, 2.64, 22.09],
    [72.0, 6.05, 70.33],
    [69.0, 4.05, 77.96],
    [59.0, 3.7, 67.67],
    [47.0, 3.54, 351.82],
    [44.0, 5.91, 7.11],
    [43.0, 5.72, 5.42],
    [39.0, 4.92, 222.86],
    [36.0, 5.9, 33.68],
    [36.0, 3.29, 8.08],
    [36.0, 3.33, 71.6],
    [35.0, 5.08, 38.13],
    [31.0, 5.62, 984.6],
    [31.0, 5.5, 59.8],
    [31.0, 5.46, 160.61],
    [30.0, 1.66, 447.8],
    [29.0, 1.15, 462.02],
    [29.0, 4.52, 84.34],
    [27.0, 5.54, 131.4],
    [27.0, 6.15, 299.13],
    [26.0, 4.99, 137.03],
    [25.0, 5.74, 380.13],
];

const L2: &[VsopTerm] = &[
    [53033.0, 0.0, 0.0],
    [2358.0, 2.2601, 74.7816],
    [769.0, 4.526, 11.046],
    [552.0, 3.258, 63.736],
    [542.0, 2.276, 3.932],
    [529.0, 4.923, 1.484],
    [258.0, 3.691, 3.181],
    [239.0, 5.858, 149.563],
    [182.0, 6.218, 70.849],
    [54.0, 1.44, 76.27],
    [49.0, 6.03, 56.62],
    [45.0, 3.91, 2.45],
    [45.0, 0.81, 85.83],
    [38.0, 1.78, 52.69],
    [37.0, 4.46, 2.97],
    [33.0, 0.86, 9.56],
    [29.0, 5.1, 73.3],
    [24.0, 2.11, 18.16],
    [22.0, 5.99, 138.52],
    [22.0, 4.82, 78.71],
    [21.0, 2.4, 77.96],
    [21.0, 2.17, 224.34],
    [17.0, 2.54, 145.63],
    [17.0, 3.47, 12.53],
    [12.0, 0.02, 22.09],
    [11.0, 0.08, 127.47],
    [10.0, 5.16, 71.6],
    [10.0, 4.46, 62.25],
    [9.0, 4.26, 7.11],
    [8.0, 5.5, 67.67],
    [7.0, 1.25, 5.42],
    [6.0, 3.36, 447.8],
    [6.0, 5.45, 65.22],
    [6.0, 4.52, 151.05],
    [6.0, 5.73, 462.02],
];

const L3: &[VsopTerm] = &[
    [121.0, 0.024, 74.782],
    [68.0, 4.12, 3.93],
    [53.0, 2.39, 11.05],
    [46.0, 0.0, 0.0],
    [45.0, 2.04, 3.18],
    [44.0, 2.96, 1.48],
    [25.0, 4.89, 63.74],
    [21.0, 4.55, 70.85],
    [20.0, 2.31, 149.56],
    [9.0, 1.58, 56.62],
    [4.0, 0.23, 18.16],
    [4.0, 5.39, 76.27],
    [4.0, 0.95, 77.96],
    [3.0, 4.98, 85.83],
    [3.0, 4.13, 52.69],
    [3.0, 0.37, 78.71],
    [2.0, 0.86, 145.63],
    [2.0, 5.66, 9.56],
];

const L4: &[VsopTerm] = &[
    [114.0, 3.142, 0.0],
    [6.0, 4.58, 74.78],
    [3.0, 0.35, 11.05],
    [1.0, 3.42, 56.62],
];

const B0: &[VsopTerm] = &[
    [1346278.0, 2.6187781, 74.7815986],
    [62341.0, 5.08111, 149.5632],
    [61601.0, 3.14159, 0.0],
    [9964.0, 1.616, 76.2661],
    [9926.0, 0.5763, 73.2971],
    [3259.0, 1.2612, 224.3448],
    [2972.0, 2.2437, 1.4845],
    [2010.0, 6.0555, 148.0787],
    [1522.0, 0.2796, 63.7359],
    [924.0, 4.038, 151.048],
    [761.0, 6.14, 71.813],
    [522.0, 3.321, 138.517],
    [463.0, 0.743, 85.827],
    [437.0, 3.381, 529.691],
    [435.0, 0.341, 77.751],
    [431.0, 3.554, 213.299],
    [420.0, 5.213, 11.046],
    [245.0, 0.788, 2.969],
    [233.0, 2.257, 222.86],
    [216.0, 1.591, 38.133],
    [180.0, 3.725, 299.126],
    [175.0, 1.236, 146.594],
    [174.0, 1.937, 380.128],
    [160.0, 5.336, 111.43],
    [144.0, 5.962, 35.164],
    [116.0, 5.739, 70.849],
    [106.0, 0.941, 70.328],
    [102.0, 2.619, 78.714],
];

const B1: &[VsopTerm] = &[
    [206366.0, 4.123943, 74.781599],
    [8563.0, 0.3382, 149.5632],
    [1726.0, 2.1219, 73.2971],
    [1374.0, 0.0, 0.0],
    [1369.0, 3.0686, 76.2661],
    [451.0, 3.777, 1.484],
    [400.0, 2.848, 224.345],
    [307.0, 1.255, 148.079],
    [154.0, 3.786, 63.736],
    [112.0, 5.573, 151.048],
    [111.0, 5.329, 138.517],
    [83.0, 3.59, 71.81],
    [56.0, 3.4, 85.83],
    [54.0, 1.7, 77.75],
    [42.0, 1.21, 11.05],
    [41.0, 4.45, 78.71],
    [32.0, 3.77, 222.86],
    [30.0, 2.56, 2.97],
    [27.0, 5.34, 213.3],
    [26.0, 0.42, 380.13],
];

const B2: &[VsopTerm] = &[
    [9212.0, 5.8004, 74.7816],
    [557.0, 0.0, 0.0],
    [286.0, 2.177, 149.563],
    [95.0, 3.84, 73.3],
    [45.0, 4.88, 76.27],
    [20.0, 5.46, 1.48],
    [15.0, 0.88, 138.52],
    [14.0, 2.85, 148.08],
    [14.0, 5.07, 63.74],
    [10.0, 5.0, 224.34],
    [8.0, 6.27, 78.71],
];

const B3: &[VsopTerm] = &[
    [268.0, 1.251, 74.782],
    [11.0, 3.14, 0.0],
    [6.0, 4.01, 149.56],
    [3.0, 5.78, 73.3],
];

const B4: &[VsopTerm] = &[
    [6.0, 2.85, 74.78],
];

const R0: &[VsopTerm] = &[
    [1921264848.0, 0.0, 0.0],
    [88784984.0, 5.60377527, 74.78159857],
    [3440836.0, 0.328361, 73.2971259],
    [2055653.0, 1.7829517, 149.5631971],
    [649322.0, 4.522473, 76.266071],
    [602248.0, 3.860038, 63.735898],
    [496404.0, 1.401399, 454.909367],
    [338526.0, 1.580027, 138.517497],
    [243508.0, 1.570866, 71.812653],
    [190522.0, 1.998094, 1.484473],
    [161858.0, 2.791379, 148.078724],
    [143706.0, 1.383686, 11.0457],
    [93192.0, 0.17437, 36.64856],
    [89806.0, 3.66105, 109.94569],
    [71424.0, 4.24509, 224.3448],
    [46677.0, 1.39977, 35.16409],
    [39026.0, 3.36235, 277.03499],
    [39010.0, 1.66971, 70.84945],
    [36755.0, 3.88649, 146.59425],
    [30349.0, 0.701, 151.04767],
    [29156.0, 3.18056, 77.75054],
    [25786.0, 3.78538, 85.8273],
    [25620.0, 5.25656, 380.12777],
    [22637.0, 0.72519, 529.69097],
    [20473.0, 2.7964, 70.32818],
    [20472.0, 1.55589, 202.2534],
    [17901.0, 0.55455, 2.96895],
    [15503.0, 5.35405, 38.13304],
    [14702.0, 4.90434, 108.46122],
    [12897.0, 2.62154, 111.43016],
    [12328.0, 5.96039, 127.4718],
    [11959.0, 1.75044, 984.60033],
    [11853.0, 0.99343, 52.6902],
    [11696.0, 3.29826, 3.93215],
    [11495.0, 0.43774, 65.22037],
    [10793.0, 1.42105, 213.2991],
    [9111.0, 4.9964, 62.2514],
    [8421.0, 5.2535, 222.8603],
    [8402.0, 5.0388, 415.5525],
    [7449.0, 0.7949, 351.8166],
    [7329.0, 3.9728, 183.2428],
    [6046.0, 5.6796, 78.7138],
    [5524.0, 3.115, 9.5612],
    [5445.0, 5.1058, 145.1098],
    [5238.0, 2.6296, 33.6796],
    [4079.0, 3.2206, 340.7709],
    [3919.0, 4.2502, 39.6175],
    [3802.0, 6.1099, 184.7273],
    [3781.0, 3.4584, 456.3938],
    [3687.0, 2.4872, 453.4249],
    [3102.0, 4.1403, 219.8914],
    [2963.0, 0.8298, 56.6224],
    [2942.0, 0.4239, 299.1264],
    [2940.0, 2.1464, 137.033],
    [2938.0, 3.6766, 140.002],
    [2865.0, 0.31, 12.5302],
    [2538.0, 4.8546, 131.4039],
    [2364.0, 0.4425, 554.07],
    [2183.0, 2.9404, 305.3462],
];

const R1: &[VsopTerm] = &[
    [1479896.0, 3.6720571, 74.7815986],
    [71212.0, 6.22601, 63.7359],
    [68627.0, 6.13411, 149.5632],
    [24060.0, 3.14159, 0.0],
    [21468.0, 2.60177, 76.26607],
    [20857.0, 5.24625, 11.0457],
    [11405.0, 0.01848, 70.84945],
    [7497.0, 0.4236, 73.2971],
    [4244.0, 1.4169, 85.8273],
    [3927.0, 3.1551, 71.8127],
    [3578.0, 2.3116, 224.3448],
    [3506.0, 2.5835, 138.5175],
    [3229.0, 5.255, 3.9322],
    [3060.0, 0.1532, 1.4845],
    [2564.0, 0.9808, 148.0787],
    [2429.0, 3.9944, 52.6902],
    [1645.0, 2.6535, 127.4718],
    [1584.0, 1.4305, 78.7138],
    [1508.0, 5.06, 151.0477],
    [1490.0, 2.6756, 56.6224],
    [1413.0, 4.5746, 202.2534],
    [1403.0, 1.3699, 77.7505],
    [1228.0, 1.047, 62.2514],
    [1033.0, 0.2646, 131.4039],
    [992.0, 2.172, 65.22],
    [862.0, 5.055, 351.817],
    [744.0, 3.076, 35.164],
    [687.0, 2.499, 77.963],
    [647.0, 4.473, 70.328],
    [624.0, 0.863, 9.561],
    [604.0, 0.907, 984.6],
    [575.0, 3.231, 447.796],
    [562.0, 2.718, 462.023],
    [530.0, 5.917, 213.299],
    [528.0, 5.151, 2.969],
];

const R2: &[VsopTerm] = &[
    [22440.0, 0.69953, 74.7816],
    [4727.0, 1.699, 63.7359],
    [1682.0, 4.6483, 70.8494],
    [1650.0, 3.0966, 11.0457],
    [1434.0, 3.5212, 149.5632],
    [770.0, 0.0, 0.0],
    [500.0, 6.172, 76.266],
    [461.0, 0.767, 3.932],
    [390.0, 4.496, 56.622],
    [390.0, 5.527, 85.827],
    [292.0, 0.204, 52.69],
    [287.0, 3.534, 73.297],
    [273.0, 3.847, 138.517],
    [220.0, 1.964, 131.404],
    [216.0, 0.848, 77.963],
    [205.0, 3.248, 78.714],
    [149.0, 4.898, 127.472],
    [129.0, 2.081, 3.181],
];

const R3: &[VsopTerm] = &[
    [1164.0, 4.7345, 74.7816],
    [212.0, 3.343, 63.736],
    [196.0, 2.98, 70.849],
    [105.0, 0.958, 11.046],
    [73.0, 1.0, 149.56],
    [72.0, 0.03, 56.62],
    [55.0, 2.59, 3.93],
    [36.0, 5.65, 77.96],
    [34.0, 3.82, 76.27],
    [32.0, 3.6, 131.4],
];

const R4: &[VsopTerm] = &[
    [53.0, 3.01, 74.78],
    [10.0, 1.91, 56.62],
];

pub(crate) static URANUS: VsopModel = VsopModel {
    lon: &[L0, L1, L2, L3, L4],
    lat: &[B0, B1, B2, B3, B4],
    rad: &[R0, R1, R2, R3, R4],
};
