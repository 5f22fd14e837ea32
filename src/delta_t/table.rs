// Delta-T nodes (MJD of UT, seconds) sampled from the Espenak-Meeus expressions.

use super::DeltaTNode;

pub(crate) static DELTA_T_NODES: [DeltaTNode; 209] = [
    DeltaTNode { mjd: -1409410.18, dt: 46675.68 },
    DeltaTNode { mjd: -1391148.0715, dt: 45461.28 },
    DeltaTNode { mjd: -1372885.963, dt: 44262.88 },
    DeltaTNode { mjd: -1354623.8545, dt: 43080.48 },
    DeltaTNode { mjd: -1336361.746, dt: 41914.08 },
    DeltaTNode { mjd: -1318099.6375, dt: 40763.68 },
    DeltaTNode { mjd: -1299837.529, dt: 39629.28 },
    DeltaTNode { mjd: -1281575.4205, dt: 38510.88 },
    DeltaTNode { mjd: -1263313.312, dt: 37408.48 },
    DeltaTNode { mjd: -1245051.2035, dt: 36322.08 },
    DeltaTNode { mjd: -1226789.095, dt: 35251.68 },
    DeltaTNode { mjd: -1208526.9865, dt: 34197.28 },
    DeltaTNode { mjd: -1190264.878, dt: 33158.88 },
    DeltaTNode { mjd: -1172002.7695, dt: 32136.48 },
    DeltaTNode { mjd: -1153740.661, dt: 31130.08 },
    DeltaTNode { mjd: -1135478.5525, dt: 30139.68 },
    DeltaTNode { mjd: -1117216.444, dt: 29165.28 },
    DeltaTNode { mjd: -1098954.3355, dt: 28206.88 },
    DeltaTNode { mjd: -1080692.227, dt: 27264.48 },
    DeltaTNode { mjd: -1062430.1185, dt: 26338.08 },
    DeltaTNode { mjd: -1044168.01, dt: 25427.68 },
    DeltaTNode { mjd: -1025905.9015, dt: 24533.28 },
    DeltaTNode { mjd: -1007643.793, dt: 23654.88 },
    DeltaTNode { mjd: -989381.6845, dt: 22792.48 },
    DeltaTNode { mjd: -971119.576, dt: 21946.08 },
    DeltaTNode { mjd: -952857.4675, dt: 21115.68 },
    DeltaTNode { mjd: -934595.359, dt: 20301.28 },
    DeltaTNode { mjd: -916333.2505, dt: 19502.88 },
    DeltaTNode { mjd: -898071.142, dt: 18720.48 },
    DeltaTNode { mjd: -879809.0335, dt: 17954.08 },
    DeltaTNode { mjd: -861546.925, dt: 17203.656 },
    DeltaTNode { mjd: -843284.8165, dt: 16335.265 },
    DeltaTNode { mjd: -825022.708, dt: 15530.948 },
    DeltaTNode { mjd: -806760.5995, dt: 14781.041 },
    DeltaTNode { mjd: -788498.491, dt: 14078.212 },
    DeltaTNode { mjd: -770236.3825, dt: 13416.785 },
    DeltaTNode { mjd: -751974.274, dt: 12792.16 },
    DeltaTNode { mjd: -733712.1655, dt: 12200.339 },
    DeltaTNode { mjd: -715450.057, dt: 11637.552 },
    DeltaTNode { mjd: -697187.9485, dt: 11099.983 },
    DeltaTNode { mjd: -678925.84, dt: 10583.6 },
    DeltaTNode { mjd: -660663.7315, dt: 10084.086 },
    DeltaTNode { mjd: -642401.623, dt: 9596.872 },
    DeltaTNode { mjd: -624139.5145, dt: 9117.27 },
    DeltaTNode { mjd: -605877.406, dt: 8640.706 },
    DeltaTNode { mjd: -587615.2975, dt: 8163.064 },
    DeltaTNode { mjd: -569353.189, dt: 7681.118 },
    DeltaTNode { mjd: -551091.0805, dt: 7193.075 },
    DeltaTNode { mjd: -532828.972, dt: 6699.218 },
    DeltaTNode { mjd: -514566.8635, dt: 6202.649 },
    DeltaTNode { mjd: -496304.755, dt: 5710.045 },
    DeltaTNode { mjd: -478042.6465, dt: 5219.63 },
    DeltaTNode { mjd: -459780.538, dt: 4739.244 },
    DeltaTNode { mjd: -441518.4295, dt: 4269.56 },
    DeltaTNode { mjd: -423256.321, dt: 3813.15 },
    DeltaTNode { mjd: -404994.2125, dt: 3373.762 },
    DeltaTNode { mjd: -386732.104, dt: 2955.692 },
    DeltaTNode { mjd: -368469.9955, dt: 2563.243 },
    DeltaTNode { mjd: -350207.887, dt: 2200.288 },
    DeltaTNode { mjd: -331945.7785, dt: 1869.921 },
    DeltaTNode { mjd: -313683.67, dt: 1574.2 },
    DeltaTNode { mjd: -295421.5615, dt: 1313.99 },
    DeltaTNode { mjd: -277159.453, dt: 1088.897 },
    DeltaTNode { mjd: -258897.3445, dt: 897.294 },
    DeltaTNode { mjd: -240635.236, dt: 736.445 },
    DeltaTNode { mjd: -222373.1275, dt: 602.719 },
    DeltaTNode { mjd: -204111.019, dt: 491.904 },
    DeltaTNode { mjd: -185848.9105, dt: 399.606 },
    DeltaTNode { mjd: -167586.802, dt: 321.752 },
    DeltaTNode { mjd: -149324.6935, dt: 255.179 },
    DeltaTNode { mjd: -131062.585, dt: 198.321 },
    DeltaTNode { mjd: -112800.4765, dt: 151.991 },
    DeltaTNode { mjd: -94538.368, dt: 120.0 },
    DeltaTNode { mjd: -92712.1571, dt: 114.731 },
    DeltaTNode { mjd: -90885.9463, dt: 108.8 },
    DeltaTNode { mjd: -89059.7355, dt: 102.314 },
    DeltaTNode { mjd: -87233.5246, dt: 95.378 },
    DeltaTNode { mjd: -85407.3138, dt: 88.097 },
    DeltaTNode { mjd: -83581.1029, dt: 80.575 },
    DeltaTNode { mjd: -81754.892, dt: 72.919 },
    DeltaTNode { mjd: -79928.6812, dt: 65.233 },
    DeltaTNode { mjd: -78102.4703, dt: 57.623 },
    DeltaTNode { mjd: -76276.2595, dt: 50.194 },
    DeltaTNode { mjd: -74450.0486, dt: 43.051 },
    DeltaTNode { mjd: -72623.8378, dt: 36.299 },
    DeltaTNode { mjd: -70797.6269, dt: 30.043 },
    DeltaTNode { mjd: -68971.4161, dt: 24.389 },
    DeltaTNode { mjd: -67145.2052, dt: 19.442 },
    DeltaTNode { mjd: -65318.9944, dt: 15.307 },
    DeltaTNode { mjd: -63492.7835, dt: 12.09 },
    DeltaTNode { mjd: -61666.5727, dt: 9.894 },
    DeltaTNode { mjd: -59840.3619, dt: 8.827 },
    DeltaTNode { mjd: -58014.151, dt: 8.83 },
    DeltaTNode { mjd: -56187.9401, dt: 9.499 },
    DeltaTNode { mjd: -54361.7293, dt: 9.965 },
    DeltaTNode { mjd: -52535.5185, dt: 10.308 },
    DeltaTNode { mjd: -50709.3076, dt: 10.595 },
    DeltaTNode { mjd: -48883.0967, dt: 10.883 },
    DeltaTNode { mjd: -47056.8859, dt: 11.214 },
    DeltaTNode { mjd: -45230.675, dt: 11.618 },
    DeltaTNode { mjd: -43404.4642, dt: 12.111 },
    DeltaTNode { mjd: -41578.2533, dt: 12.698 },
    DeltaTNode { mjd: -39752.0425, dt: 13.37 },
    DeltaTNode { mjd: -37925.8316, dt: 14.106 },
    DeltaTNode { mjd: -36099.6208, dt: 14.872 },
    DeltaTNode { mjd: -34273.41, dt: 15.621 },
    DeltaTNode { mjd: -32447.1991, dt: 16.292 },
    DeltaTNode { mjd: -30620.9882, dt: 16.815 },
    DeltaTNode { mjd: -28794.7774, dt: 17.103 },
    DeltaTNode { mjd: -26968.5666, dt: 17.058 },
    DeltaTNode { mjd: -25142.3557, dt: 16.57 },
    DeltaTNode { mjd: -23316.1448, dt: 15.515 },
    DeltaTNode { mjd: -21489.934, dt: 13.72 },
    DeltaTNode { mjd: -19663.7231, dt: 12.545 },
    DeltaTNode { mjd: -17837.5123, dt: 12.501 },
    DeltaTNode { mjd: -16011.3014, dt: 12.625 },
    DeltaTNode { mjd: -14185.0906, dt: 11.864 },
    DeltaTNode { mjd: -12358.8798, dt: 9.997 },
    DeltaTNode { mjd: -10532.6689, dt: 7.673 },
    DeltaTNode { mjd: -8706.4581, dt: 5.919 },
    DeltaTNode { mjd: -6880.2472, dt: 5.456 },
    DeltaTNode { mjd: -5054.0363, dt: 6.174 },
    DeltaTNode { mjd: -3227.8255, dt: 7.107 },
    DeltaTNode { mjd: -1401.6146, dt: 7.25 },
    DeltaTNode { mjd: 424.5962, dt: 7.62 },
    DeltaTNode { mjd: 2250.8071, dt: 6.029 },
    DeltaTNode { mjd: 4077.0179, dt: 0.944 },
    DeltaTNode { mjd: 5903.2288, dt: -3.088 },
    DeltaTNode { mjd: 7729.4396, dt: -5.008 },
    DeltaTNode { mjd: 9555.6505, dt: -5.649 },
    DeltaTNode { mjd: 11381.8613, dt: -6.117 },
    DeltaTNode { mjd: 13208.0721, dt: -6.188 },
    DeltaTNode { mjd: 15034.283, dt: -2.79 },
    DeltaTNode { mjd: 16860.4938, dt: 3.835 },
    DeltaTNode { mjd: 18686.7047, dt: 10.388 },
    DeltaTNode { mjd: 20512.9156, dt: 17.086 },
    DeltaTNode { mjd: 22339.1264, dt: 21.2 },
    DeltaTNode { mjd: 24165.3373, dt: 23.784 },
    DeltaTNode { mjd: 25991.5481, dt: 24.133 },
    DeltaTNode { mjd: 27817.7589, dt: 23.817 },
    DeltaTNode { mjd: 29643.9698, dt: 24.407 },
    DeltaTNode { mjd: 31470.1807, dt: 26.879 },
    DeltaTNode { mjd: 33296.3915, dt: 29.07 },
    DeltaTNode { mjd: 35122.6024, dt: 31.047 },
    DeltaTNode { mjd: 36948.8132, dt: 33.103 },
    DeltaTNode { mjd: 38775.024, dt: 35.788 },
    DeltaTNode { mjd: 40601.2349, dt: 40.193 },
    DeltaTNode { mjd: 42427.4457, dt: 45.45 },
    DeltaTNode { mjd: 44253.6566, dt: 50.515 },
    DeltaTNode { mjd: 46079.8674, dt: 54.343 },
    DeltaTNode { mjd: 47906.0783, dt: 56.895 },
    DeltaTNode { mjd: 49732.2891, dt: 60.795 },
    DeltaTNode { mjd: 51558.5, dt: 63.86 },
    DeltaTNode { mjd: 53384.7109, dt: 64.671 },
    DeltaTNode { mjd: 55210.9217, dt: 66.701 },
    DeltaTNode { mjd: 57037.1326, dt: 69.01 },
    DeltaTNode { mjd: 58863.3434, dt: 71.599 },
    DeltaTNode { mjd: 60689.5543, dt: 74.467 },
    DeltaTNode { mjd: 62515.7651, dt: 77.615 },
    DeltaTNode { mjd: 64341.976, dt: 81.042 },
    DeltaTNode { mjd: 66168.1868, dt: 84.749 },
    DeltaTNode { mjd: 67994.3976, dt: 88.735 },
    DeltaTNode { mjd: 69820.6085, dt: 93.0 },
    DeltaTNode { mjd: 71646.8194, dt: 103.254 },
    DeltaTNode { mjd: 73473.0302, dt: 113.668 },
    DeltaTNode { mjd: 75299.241, dt: 124.242 },
    DeltaTNode { mjd: 77125.4519, dt: 134.976 },
    DeltaTNode { mjd: 78951.6628, dt: 145.87 },
    DeltaTNode { mjd: 80777.8736, dt: 156.924 },
    DeltaTNode { mjd: 82604.0844, dt: 168.138 },
    DeltaTNode { mjd: 84430.2953, dt: 179.512 },
    DeltaTNode { mjd: 86256.5062, dt: 191.046 },
    DeltaTNode { mjd: 88082.717, dt: 202.74 },
    DeltaTNode { mjd: 89908.9279, dt: 214.594 },
    DeltaTNode { mjd: 91735.1387, dt: 226.608 },
    DeltaTNode { mjd: 93561.3495, dt: 238.782 },
    DeltaTNode { mjd: 95387.5604, dt: 251.116 },
    DeltaTNode { mjd: 97213.7712, dt: 263.61 },
    DeltaTNode { mjd: 99039.9821, dt: 276.264 },
    DeltaTNode { mjd: 100866.1929, dt: 289.078 },
    DeltaTNode { mjd: 102692.4038, dt: 302.052 },
    DeltaTNode { mjd: 104518.6147, dt: 315.186 },
    DeltaTNode { mjd: 106344.8255, dt: 328.48 },
    DeltaTNode { mjd: 108171.0363, dt: 339.12 },
    DeltaTNode { mjd: 109997.2472, dt: 349.92 },
    DeltaTNode { mjd: 111823.4581, dt: 360.88 },
    DeltaTNode { mjd: 113649.6689, dt: 372.0 },
    DeltaTNode { mjd: 115475.8797, dt: 383.28 },
    DeltaTNode { mjd: 117302.0906, dt: 394.72 },
    DeltaTNode { mjd: 119128.3014, dt: 406.32 },
    DeltaTNode { mjd: 120954.5123, dt: 418.08 },
    DeltaTNode { mjd: 122780.7231, dt: 430.0 },
    DeltaTNode { mjd: 124606.934, dt: 442.08 },
    DeltaTNode { mjd: 142869.0425, dt: 571.68 },
    DeltaTNode { mjd: 161131.151, dt: 717.28 },
    DeltaTNode { mjd: 179393.2595, dt: 878.88 },
    DeltaTNode { mjd: 197655.368, dt: 1056.48 },
    DeltaTNode { mjd: 215917.4765, dt: 1250.08 },
    DeltaTNode { mjd: 234179.585, dt: 1459.68 },
    DeltaTNode { mjd: 252441.6935, dt: 1685.28 },
    DeltaTNode { mjd: 270703.802, dt: 1926.88 },
    DeltaTNode { mjd: 288965.9105, dt: 2184.48 },
    DeltaTNode { mjd: 307228.019, dt: 2458.08 },
    DeltaTNode { mjd: 325490.1275, dt: 2747.68 },
    DeltaTNode { mjd: 343752.236, dt: 3053.28 },
    DeltaTNode { mjd: 362014.3445, dt: 3374.88 },
    DeltaTNode { mjd: 380276.453, dt: 3712.48 },
    DeltaTNode { mjd: 398538.5615, dt: 4066.08 },
    DeltaTNode { mjd: 416800.67, dt: 4435.68 },
];
