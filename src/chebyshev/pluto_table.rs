// Chebyshev segments for the heliocentric position of Pluto (AU, equatorial J2000).
// Each record spans 4096 days of terrestrial time, coefficients are ordered x, y, z.

use super::ChebSegment;

pub(crate) static PLUTO_SEGMENTS: [ChebSegment<13>; 54] = [
    ChebSegment {
        tt_start: -110592.0,
        tt_end: -106496.0,
        coeffs: [
            [
                -26.71508219901032,
                -2.526560593791111,
                0.17697625112404197,
                0.006276330808038193,
                4.706485188749481e-05,
                -4.002723141109772e-06,
                -2.522855191080872e-07,
                -7.16864297837324e-09,
                -6.367556055080898e-14,
                1.1201979514925579e-11,
                6.225447507928878e-13,
                -4.099285014000578e-15,
                -1.3254354878601869e-14,
            ],
            [
                19.428354489467615,
                -5.459083243900595,
                -0.12778438181289978,
                0.003469295960319239,
                0.00020341396953518561,
                5.288850415533593e-06,
                5.6603659878909145e-09,
                -6.9853560201129135e-09,
                -3.716040125184988e-10,
                -8.912118906104856e-12,
                1.1860597973841673e-13,
                6.230913221280879e-14,
                -7.720320109701088e-15,
            ],
            [
                14.105211645209922,
                -0.9414250455271346,
                -0.09316179746934648,
                -0.0008087649987521453,
                4.92634779460078e-05,
                2.8552986379373542e-06,
                7.776288030597173e-08,
                -1.9178368295167905e-11,
                -1.1587749563309793e-10,
                -6.153846663017668e-12,
                -1.5058040284762124e-13,
                2.0223139402402852e-14,
                1.1614640873001638e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: -106496.0,
        tt_end: -102400.0,
        coeffs: [
            [
                -30.110406926530064,
                -0.8052231767118551,
                0.2529306478319499,
                0.005998324814034215,
                -0.00010752660005244671,
                -1.190317182912045e-05,
                -3.541653725847027e-07,
                4.6448960233647085e-09,
                8.898952002639887e-10,
                3.3985532337073194e-11,
                -1.6041868688122262e-13,
                -1.1368683772161603e-13,
                -6.080606104100857e-15,
            ],
            [
                7.663865250754459,
                -6.251855688896999,
                -0.06335714904023249,
                0.0074838595983795116,
                0.0002868271465984024,
                1.5348304729037375e-06,
                -3.825164647253132e-07,
                -2.028267031251884e-08,
                -2.390610103038153e-10,
                2.900462775939489e-11,
                1.950166523993875e-12,
                3.921649330060553e-14,
                1.021405182655144e-14,
            ],
            [
                11.459043998548461,
                -1.7071832252563293,
                -0.09594971284785267,
                0.0005270554857455833,
                0.00012184775056967877,
                4.0643801000328494e-06,
                -1.261306601043963e-08,
                -7.724993567902716e-09,
                -3.426243903976893e-10,
                -1.191252225068568e-12,
                6.565688164090926e-13,
                4.632192065820653e-14,
                5.53403476890078e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: -102400.0,
        tt_end: -98304.0,
        coeffs: [
            [
                -29.50363413570154,
                1.4562997889079499,
                0.3055234392555738,
                0.002025921737204984,
                -0.0003995259091639652,
                -1.477056609972421e-05,
                2.943161316710967e-07,
                4.168242038706292e-08,
                7.653556421106399e-10,
                -7.52076691521954e-11,
                -4.687669056343461e-12,
                -3.6893565126005205e-15,
                3.75767792950053e-15,
            ],
            [
                -5.008336353517479,
                -6.323340479348759,
                0.05285475140049479,
                0.011629018414917223,
                0.00018135314703870975,
                -1.3814684885439842e-05,
                -7.942214970306611e-07,
                2.924121628594251e-09,
                1.9472142530875e-09,
                6.238437117316992e-11,
                -2.740021884597774e-12,
                -2.709712796025507e-13,
                1.857915530824637e-14,
            ],
            [
                7.324234529864735,
                -2.410718975753328,
                -0.07554944482094984,
                0.0030165017601561863,
                0.00017691364047213762,
                1.40917455618924e-07,
                -3.363598536109381e-07,
                -1.1644114458966634e-08,
                3.767475220683991e-10,
                4.211168166316034e-11,
                5.570928334026786e-13,
                -8.307884295041171e-14,
                4.850820599900684e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: -98304.0,
        tt_end: -94208.0,
        coeffs: [
            [
                -24.158563788289484,
                3.8711298028677064,
                0.2840867887608951,
                -0.0059421359973359685,
                -0.0005299282462587485,
                5.561178181341557e-06,
                1.214898454385058e-06,
                1.5605874199746512e-09,
                -3.160550385508451e-09,
                -4.5809783317124056e-11,
                8.553841395881206e-12,
                2.1808196274483076e-13,
                -1.851510397990261e-14,
            ],
            [
                -16.77311271865771,
                -5.319998135813451,
                0.19775630387671994,
                0.011454069337127329,
                -0.00023818634609622352,
                -2.405155671890104e-05,
                2.30001484388035e-07,
                6.113546810673562e-08,
                1.8480260057283607e-10,
                -1.6703192675147596e-10,
                -2.7764457399825915e-12,
                4.666352774270658e-13,
                -3.347749428100472e-15,
            ],
            [
                2.0451016614181596,
                -2.825226472733225,
                -0.02390079575125858,
                0.005362235258967866,
                8.535031727965666e-05,
                -9.176352899354667e-06,
                -2.942352053627071e-07,
                1.8596716986853433e-08,
                1.0096892211208797e-09,
                -3.82950423508751e-11,
                -3.4423062690900853e-12,
                7.976525423076125e-14,
                5.192427684400732e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: -94208.0,
        tt_end: -90112.0,
        coeffs: [
            [
                -14.459550084103313,
                5.732453371595462,
                0.1702630112915616,
                -0.012132603846192379,
                -0.00018001926132445062,
                2.476706734455547e-05,
                7.90229010432925e-08,
                -6.09457909097098e-08,
                6.198392226836474e-10,
                1.6001777680685336e-10,
                -4.0401186669651694e-12,
                -4.3438756865026126e-13,
                2.4800674334703497e-14,
            ],
            [
                -25.46276179744929,
                -3.284857519745368,
                0.29890144231621407,
                0.004618540270639708,
                -0.0005448600816524601,
                -2.5897302785656743e-06,
                1.2115644769148905e-06,
                -9.535185905808529e-09,
                -3.0373417285563145e-09,
                6.840504231429524e-11,
                7.815560164859701e-12,
                -3.3860094215644774e-13,
                -2.5620531337503613e-14,
            ],
            [
                -3.5865218595014356,
                -2.751204779129376,
                0.04193191503147079,
                0.00509521450157167,
                -0.00011569859368867682,
                -8.268357912600576e-06,
                3.540529315709379e-07,
                1.5384933054025833e-08,
                -1.133989329788348e-09,
                -2.6867644861065052e-11,
                3.6539233177607525e-12,
                2.509531044508479e-14,
                -1.4804397024520837e-14,
            ],
        ],
    },
    ChebSegment {
        tt_start: -90112.0,
        tt_end: -86016.0,
        coeffs: [
            [
                -2.1044513184630436,
                6.499015202193653,
                0.02269895808300613,
                -0.01143465475057722,
                0.00022427466941844242,
                1.208054217836609e-05,
                -8.242915359510597e-07,
                2.311066073555314e-09,
                1.8250327061563298e-09,
                -7.172764946097651e-11,
                -2.007419871356083e-12,
                2.6119277680873684e-13,
                -1.3664283380001927e-14,
            ],
            [
                -29.56716977329606,
                -0.8149348695792786,
                0.30479614659382126,
                -0.0031782578142395524,
                -0.0003694125449971335,
                1.5904605332431962e-05,
                1.8966308619365708e-07,
                -4.052322238451849e-08,
                9.891766038750716e-10,
                6.341429945258334e-11,
                -4.855466456249884e-12,
                -1.5167354551802138e-14,
                9.56499836600135e-15,
            ],
            [
                -8.588209201070072,
                -2.2118007801777826,
                0.08822245013134801,
                0.002453368058940697,
                -0.00018276832034248313,
                1.3211321445374745e-06,
                3.07452868907577e-07,
                -1.3334314438942293e-08,
                -2.412528296793845e-10,
                4.1383716966090736e-11,
                -9.096313446067283e-13,
                -8.355709286871178e-14,
                8.625578883626216e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: -86016.0,
        tt_end: -81920.0,
        coeffs: [
            [
                10.691708762499578,
                6.204604268641513,
                -0.08821975555370146,
                -0.00687977226034775,
                0.00029675756918834395,
                -2.8132330418027496e-06,
                -3.3846121857331684e-07,
                2.054304487203878e-08,
                -3.4310892588634417e-10,
                -2.4122857557638502e-11,
                1.91556172633402e-12,
                -5.332486589045752e-14,
                5.1241062675007224e-15,
            ],
            [
                -28.93440170547673,
                1.3945822259237286,
                0.2416270077334898,
                -0.006603195759783904,
                -7.465071607380371e-05,
                1.1351635682042517e-05,
                -3.8452363945942545e-07,
                -2.0774187156838217e-09,
                8.21385216253335e-10,
                -3.600975927698668e-11,
                1.0029584000921414e-13,
                4.071956447240574e-14,
                -9.769962616701378e-15,
            ],
            [
                -12.245322331977379,
                -1.4340021123021596,
                0.10193511852181722,
                1.3141534478331952e-05,
                -0.00011267522314503034,
                4.387648809201804e-06,
                -1.7967133695370087e-08,
                -6.836045439119796e-09,
                3.595223264395687e-10,
                -3.963871965704759e-12,
                -5.448632997775768e-13,
                2.814842376280397e-14,
                -3.586874387250506e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: -81920.0,
        tt_end: -77824.0,
        coeffs: [
            [
                22.186605445358076,
                5.243049805119112,
                -0.14510761967611183,
                -0.0028558117618544543,
                0.0001976144602570374,
                -5.65651669422078e-06,
                3.2538119344193405e-08,
                6.085751799936099e-09,
                -3.6443163017233576e-10,
                1.0025621358741214e-11,
                5.096777700740719e-14,
                7.788641526601099e-15,
                -2.937820926700414e-15,
            ],
            [
                -24.468113082771616,
                3.0044054347708236,
                0.16113331622224025,
                -0.00646333981642263,
                6.608248865747922e-05,
                3.32335668509551e-06,
                -2.424242315267013e-07,
                7.647072991928256e-09,
                -4.2295876203122765e-11,
                -9.620475356524157e-12,
                6.140728950972866e-13,
                -3.5937065289405066e-14,
                -4.5092135154006356e-15,
            ],
            [
                -14.314824994021405,
                -0.6422580844912553,
                0.09396875172067108,
                -0.0011554080071048882,
                -3.892023728642339e-05,
                2.7403511465488114e-06,
                -8.540596961272338e-08,
                5.516976277529186e-10,
                9.658585042870982e-11,
                -6.021303114231649e-12,
                1.7476618443022465e-13,
                -1.2502819292701763e-14,
                -3.0744637605004334e-16,
            ],
        ],
    },
    ChebSegment {
        tt_start: -77824.0,
        tt_end: -73728.0,
        coeffs: [
            [
                31.435897583072382,
                3.9907446547368504,
                -0.16389189739000515,
                -0.0005182118056027845,
                0.00010065108297342161,
                -3.830890039925915e-06,
                9.016420020858416e-08,
                -4.475030944097223e-10,
                -7.87888045404263e-11,
                4.7423261898634685e-12,
                -1.7763568394002505e-13,
                3.75767792950053e-14,
                6.217248937900877e-15,
            ],
            [
                -17.40091055353237,
                4.004543946055205,
                0.09127263787240462,
                -0.005123123486452112,
                9.004730950797815e-05,
                -2.690717403416224e-07,
                -7.462062202333843e-08,
                3.986813477642779e-09,
                -1.2165092864681634e-10,
                1.666769286692635e-12,
                6.504198888880917e-14,
                -2.0086496568602833e-14,
                -7.51535585900106e-16,
            ],
            [
                -14.896652557807064,
                0.046931887159108884,
                0.07784018190961817,
                -0.0014416237710145414,
                -2.2382828748736583e-06,
                1.070057254974717e-06,
                -5.043168289813156e-08,
                1.3781629512812708e-09,
                -1.4207302001523203e-11,
                -9.099046302743284e-13,
                7.542684425761063e-14,
                -1.5645604470102207e-14,
                -2.596213842200366e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: -73728.0,
        tt_end: -69632.0,
        coeffs: [
            [
                38.10250536747049,
                2.6770171777382643,
                -0.162615822755039,
                0.0005890866429522335,
                4.3713815913384646e-05,
                -1.982421312509184e-06,
                6.064893544642193e-08,
                -1.2222925577659156e-09,
                7.16500363313781e-12,
                7.87062722688111e-13,
                -5.60235618580079e-14,
                3.33408514472047e-14,
                1.2024569374401695e-14,
            ],
            [
                -8.83960157920214,
                4.512425881737861,
                0.03803331508799373,
                -0.0037918779656582577,
                7.379403778802366e-05,
                -1.0965457503376597e-06,
                -7.040039115771344e-09,
                1.2093008304138773e-09,
                -5.341600666060213e-11,
                1.5558153056470193e-12,
                -9.56499836600135e-15,
                -2.097467498830296e-14,
                6.9346238153509776e-15,
            ],
            [
                -14.234438732380893,
                0.6011063137511864,
                0.06085211308519416,
                -0.0013600356828472005,
                9.843975306831855e-06,
                2.5518570777850215e-07,
                -2.0464691684852507e-08,
                7.453273553892359e-10,
                -1.8817631213935853e-11,
                2.477334576794349e-13,
                1.3937569047601965e-14,
                -1.482574746730209e-14,
                -1.878838964750265e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: -69632.0,
        tt_end: -65536.0,
        coeffs: [
            [
                42.18469512412916,
                1.4137024156406819,
                -0.15243262464012838,
                0.0010394686240759326,
                1.6056452497974322e-05,
                -8.95462972695126e-07,
                3.198081635411234e-08,
                -7.903618272673787e-10,
                1.474594805236288e-11,
                -9.401026965441325e-14,
                -2.26827104108032e-14,
                4.290584981320605e-14,
                4.9191420168006935e-15,
            ],
            [
                0.35848516169800504,
                4.653072975045741,
                -0.0011140556918384993,
                -0.0027871716808185454,
                5.211110737153472e-05,
                -1.0078727468336542e-06,
                9.856278528384511e-09,
                1.9373200479741662e-10,
                -1.582494818946473e-11,
                6.038246825622851e-13,
                -1.1580480164551633e-14,
                3.006142343600424e-15,
                -5.2949098097507465e-16,
            ],
            [
                -12.59503526676891,
                1.0255642244252707,
                0.045575376300097704,
                -0.001182402393042937,
                1.1412981645701866e-05,
                -4.4582963508988683e-08,
                -6.559739554964276e-09,
                2.984957238648069e-10,
                -9.376841183858722e-12,
                2.164422487392305e-13,
                3.006142343600424e-15,
                -1.3527640546201907e-14,
                -1.9471603816502747e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: -65536.0,
        tt_end: -61440.0,
        coeffs: [
            [
                43.834474435010414,
                0.24737945708896475,
                -0.13889186919196014,
                0.001188180540118275,
                4.28698736789976e-06,
                -3.446574116703862e-07,
                1.570276162090942e-08,
                -4.020218004650535e-10,
                9.264930702976506e-12,
                -1.404688331464198e-13,
                -1.8310139729202583e-14,
                4.3452421148406124e-14,
                7.378713025201041e-15,
            ],
            [
                9.558857724667023,
                4.523107790900989,
                -0.030177971510217352,
                -0.00210076890945087,
                3.4533405364019115e-05,
                -7.473124493246203e-07,
                1.0692613632119656e-08,
                -6.800488377551189e-11,
                -3.0413278733039287e-12,
                1.8460446846382602e-13,
                -4.7141777661006645e-15,
                2.3570888830503323e-15,
                1.7080354225002409e-15,
            ],
            [
                -10.222116180422004,
                1.3364048381130655,
                0.03243154231559696,
                -0.001013165805301351,
                9.476361827208935e-06,
                -1.292433546167943e-07,
                -1.3955715215930609e-09,
                9.988891765015769e-11,
                -3.740460932441727e-12,
                1.013889826796143e-13,
                3.2794280112004626e-15,
                -1.0863105287101531e-14,
                3.0744637605004334e-16,
            ],
        ],
    },
    ChebSegment {
        tt_start: -61440.0,
        tt_end: -57344.0,
        coeffs: [
            [
                43.263800547457336,
                -0.805964384168557,
                -0.12439243877976261,
                0.0012188174995421046,
                4.0363196026541675e-07,
                -7.407434583665935e-08,
                7.84710716918478e-09,
                -1.823591534188241e-10,
                4.8415288872022825e-12,
                -8.307884295041171e-14,
                -2.213613907560312e-14,
                4.18127071428059e-14,
                7.788641526601099e-15,
            ],
            [
                18.289756669964696,
                4.189191073218499,
                -0.05252215994587317,
                -0.0016546444733330863,
                2.196239098030726e-05,
                -5.199731096293083e-07,
                8.127149551630563e-09,
                -9.773023416178497e-11,
                3.8137014913585375e-13,
                4.304249264700607e-14,
                -1.0658141036401503e-14,
                1.8856711064402658e-14,
                -2.288767466150323e-15,
            ],
            [
                -7.32666958473094,
                1.5495983821681525,
                0.021094184133956764,
                -0.0008832972034344795,
                6.725582816822741e-06,
                -1.3985457810642507e-07,
                1.7065309849001026e-10,
                2.4451825180012047e-11,
                -1.339509699741589e-12,
                3.7986707796405354e-14,
                3.6893565126005205e-15,
                -5.875641853400828e-15,
                -3.723517221050525e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: -57344.0,
        tt_end: -53248.0,
        coeffs: [
            [
                40.70308791608938,
                -1.742544440604051,
                -0.10974768456093696,
                0.0012222005930952334,
                4.7099709705050304e-07,
                6.786901980586453e-08,
                4.496447248724367e-09,
                -6.913471504678735e-11,
                2.5060295718923533e-12,
                -3.388742278240478e-14,
                -1.858342539680262e-14,
                3.935313613440555e-14,
                8.608498529401213e-15,
            ],
            [
                26.18882145151143,
                3.6948386532378685,
                -0.07058080969988587,
                -0.001376736183966242,
                1.3303273533984759e-05,
                -3.5539725856254404e-07,
                5.7107166858608815e-09,
                -7.145135765103287e-11,
                1.0614415329585497e-12,
                1.2297855042001734e-14,
                -1.462078321660206e-14,
                2.5278924253003563e-14,
                -3.962642180200559e-15,
            ],
            [
                -4.0911320285303745,
                1.6775726683902958,
                0.01104914906456746,
                -0.0007976817801815464,
                4.0046479997412325e-06,
                -1.3129034283674804e-07,
                4.2634531802412734e-10,
                -1.4577057509786056e-12,
                -4.248908917011599e-13,
                1.298106921100183e-14,
                3.416070845000482e-16,
                -4.748338474550669e-15,
                -4.6629367034256575e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: -53248.0,
        tt_end: -49152.0,
        coeffs: [
            [
                36.38664197944824,
                -2.5615935837802466,
                -0.09497371588658045,
                0.0012459479959862673,
                2.7923847723671384e-06,
                1.6042223740861607e-07,
                3.495641793121579e-09,
                -7.720320109701088e-12,
                1.4768357477106082e-12,
                -1.694371139120239e-14,
                -2.26827104108032e-14,
                3.6073708123205084e-14,
                5.329070518200751e-15,
            ],
            [
                32.963763010134706,
                3.0672324165318923,
                -0.08603665801532127,
                -0.0012139098846699443,
                7.424297100792151e-06,
                -2.383686891632281e-07,
                4.207651526345357e-09,
                -3.526204969043297e-11,
                1.1926186534065681e-12,
                1.448414038280204e-14,
                -1.1751283706801656e-14,
                2.5688852754403622e-14,
                2.6645352591003757e-15,
            ],
            [
                -0.6772658900182874,
                1.7285702883483611,
                0.001776470650292858,
                -0.0007540940115188158,
                1.4716867414977541e-06,
                -1.2267689377163896e-07,
                2.5907163593895066e-10,
                -8.670056126028123e-12,
                -7.194245199571014e-14,
                7.959445068851122e-15,
                4.7654188287756716e-15,
                -3.672276158375518e-15,
                -4.270088556250602e-16,
            ],
        ],
    },
    ChebSegment {
        tt_start: -49152.0,
        tt_end: -45056.0,
        coeffs: [
            [
                30.55172663835719,
                -3.2605448195504443,
                -0.07963361077665682,
                0.0013208680696441032,
                6.847759736344345e-06,
                2.465828801999893e-07,
                3.866709619160247e-09,
                3.2252081347486146e-11,
                1.092596099064954e-12,
                -8.198570028001156e-16,
                -1.639714005600231e-14,
                3.8533279131605435e-14,
                3.006142343600424e-15,
            ],
            [
                38.36501425068473,
                2.3223628692356537,
                -0.10003112020748316,
                -0.0011280292910133593,
                3.6098199481889774e-06,
                -1.447337494981254e-07,
                3.787734980365853e-09,
                6.947468241728179e-12,
                1.5063505998114124e-12,
                2.1316282072803006e-14,
                -1.4757426050402082e-14,
                3.7986707796405354e-14,
                6.8321416900009635e-15,
            ],
            [
                2.765591647589086,
                1.706801145984674,
                -0.0072114791383783,
                -0.0007499221367265074,
                -9.398305377016615e-07,
                -1.1943273250722632e-07,
                1.6401580948100812e-11,
                -7.544716987913839e-12,
                1.4234767211117007e-13,
                7.532436213226061e-15,
                -4.697097411875662e-16,
                4.782499183000674e-16,
                2.2375264034753154e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: -45056.0,
        tt_end: -40960.0,
        coeffs: [
            [
                23.445344674098173,
                -3.8319400790639904,
                -0.06294572692662935,
                0.0014753032425869168,
                1.2800163809983518e-05,
                3.539799750412315e-07,
                5.228695425347933e-09,
                6.399913078124743e-11,
                8.813462780101242e-13,
                -4.372570681600617e-15,
                -1.120471237160158e-14,
                2.1179639239002987e-14,
                3.75767792950053e-15,
            ],
            [
                42.167194641450045,
                1.4687632216949185,
                -0.11330001939128045,
                -0.0010883179729006542,
                1.6708868698217955e-06,
                -4.537544166046595e-08,
                4.7710435943862155e-09,
                6.823779148572402e-11,
                2.454651866383546e-12,
                5.028456283840709e-14,
                -1.5303997385602157e-14,
                4.126613580760582e-14,
                2.7328566760003855e-15,
            ],
            [
                6.092704845196095,
                1.6126757097799969,
                -0.01637969176485672,
                -0.0007841065959667868,
                -3.337912075287783e-06,
                -1.2079780321327095e-07,
                -8.701080881442416e-11,
                2.013637120293984e-12,
                4.990196290376703e-13,
                1.680706855740237e-14,
                -1.9813210901002794e-15,
                6.4222131886009056e-15,
                -2.391249591500337e-16,
            ],
        ],
    },
    ChebSegment {
        tt_start: -40960.0,
        tt_end: -36864.0,
        coeffs: [
            [
                15.336802416019811,
                -4.26062410676881,
                -0.043755767671852436,
                0.0017442223902588256,
                2.1294533967127685e-05,
                5.037299447307165e-07,
                7.339652031445299e-09,
                8.285748155965568e-11,
                9.728969766561371e-14,
                -4.481884948640632e-14,
                -1.667042572360235e-14,
                1.7080354225002408e-14,
                -2.7328566760003855e-16,
            ],
            [
                44.157268039906285,
                0.510553674985479,
                -0.1262070234319529,
                -0.0010617936853345956,
                2.1155927848545057e-06,
                1.0250766334908033e-07,
                8.047037497887617e-09,
                1.7690983720687933e-10,
                4.584093788323047e-12,
                9.29171269840131e-14,
                -1.8310139729202583e-14,
                4.2085992810405936e-14,
                1.3254354878601869e-14,
            ],
            [
                9.156460448984667,
                1.442909050506625,
                -0.026189357417744547,
                -0.0008568949826422039,
                -5.7582719335322545e-06,
                -1.1977947591044716e-07,
                2.993001402273876e-10,
                3.023987897694706e-11,
                1.4015455462867976e-12,
                4.372570681600617e-14,
                -4.099285014000578e-16,
                8.881784197001252e-15,
                2.049642507000289e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: -36864.0,
        tt_end: -32768.0,
        coeffs: [
            [
                6.536423320277317,
                -4.520323747557698,
                -0.020415239718925997,
                0.0021758739524023315,
                3.331224904730316e-05,
                7.060599486954708e-07,
                9.34926884628322e-09,
                4.3027052006786665e-11,
                -3.3433768574188715e-12,
                -1.6861725690922377e-13,
                -1.448414038280204e-14,
                9.633319782901359e-15,
                8.847623488551248e-15,
            ],
            [
                44.12892878310421,
                -0.549259476797478,
                -0.1386384017582167,
                -0.0009990286425348288,
                6.59687706690175e-06,
                3.747601930661823e-07,
                1.5573705197241978e-08,
                3.81485475687581e-10,
                8.522686829774802e-12,
                1.432016898224202e-13,
                -2.2955996078403237e-14,
                4.290584981320605e-14,
                6.558856022400925e-15,
            ],
            [
                11.798978800924466,
                1.1905193179962885,
                -0.037101634017570446,
                -0.0009674034928008377,
                -7.980765677036043e-06,
                -9.579269589520524e-08,
                2.04254650799822e-09,
                1.0608102430663936e-10,
                3.667083730691117e-12,
                9.483012665721337e-14,
                -3.0744637605004336e-15,
                1.0111569701201426e-14,
                -7.51535585900106e-16,
            ],
        ],
    },
    ChebSegment {
        tt_start: -32768.0,
        tt_end: -28672.0,
        coeffs: [
            [
                -2.577709039579577,
                -4.568989529939438,
                0.00939911096814888,
                0.0028341303915936623,
                4.968087580156868e-05,
                9.250863716426549e-07,
                7.717277381238738e-09,
                -2.2279412502913287e-10,
                -1.5581792266717597e-11,
                -5.74446473295281e-13,
                -8.403534278701185e-15,
                1.836138079187759e-15,
                4.218847493575595e-15,
            ],
            [
                41.88507718853961,
                -1.7038036539313288,
                -0.14966893479516094,
                -0.0008089641782804008,
                1.8873656684420963e-05,
                9.120996378004958e-07,
                3.0814822830157375e-08,
                7.3186393697492e-10,
                1.305048377057224e-11,
                8.253227161521163e-14,
                -2.5688852754403622e-14,
                4.5911992156806475e-14,
                1.13413552054016e-14,
            ],
            [
                13.844829364837675,
                0.8449779501946589,
                -0.049527791486918785,
                -0.0011064644747167908,
                -9.081744726503215e-06,
                5.885101363499136e-09,
                7.2903267013001685e-09,
                2.9551089780327927e-10,
                8.766184359606436e-12,
                1.978588233424279e-13,
                -4.9191420168006935e-15,
                1.3322676295501878e-14,
                1.0248212535001446e-16,
            ],
        ],
    },
    ChebSegment {
        tt_start: -28672.0,
        tt_end: -24576.0,
        coeffs: [
            [
                -11.522300857707666,
                -4.34278930986922,
                0.04881233305445594,
                0.0037836762410432376,
                6.913992257692095e-05,
                9.55165506620294e-07,
                -9.59783746496284e-09,
                -1.1960512580344584e-09,
                -5.043828602643211e-11,
                -1.4449979674352037e-12,
                -2.035978223620287e-14,
                -2.049642507000289e-15,
                -4.338409973150612e-15,
            ],
            [
                37.25410301503037,
                -2.9331662544182544,
                -0.15681138921370172,
                -0.00031304591695293136,
                4.641525733444059e-05,
                1.944301099745014e-06,
                5.693211864336963e-08,
                1.0948364949679392e-09,
                4.8251317471462805e-12,
                -7.65746440615308e-13,
                -6.148927521000867e-14,
                4.481884948640632e-14,
                3.4160708450004818e-15,
            ],
            [
                15.094828458634577,
                0.3932623890453208,
                -0.0636332807136433,
                -0.001237851456236646,
                -6.3505803594283025e-06,
                3.189176056231155e-07,
                2.0657505928056707e-08,
                7.020287940716886e-10,
                1.6704586432052356e-11,
                1.98542037511428e-13,
                -1.2571140709601772e-14,
                1.448414038280204e-14,
                1.7421961309502456e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: -24576.0,
        tt_end: -20480.0,
        coeffs: [
            [
                -19.659464135615988,
                -3.750569770568669,
                0.10140327276732027,
                0.005014882884018481,
                8.205872358720748e-05,
                8.665997806535695e-08,
                -7.460987615760271e-08,
                -3.7818833876512006e-09,
                -1.1222721897096423e-10,
                -1.4839411750682092e-12,
                5.684341886080802e-14,
                -6.148927521000867e-15,
                -9.155069864601291e-15,
            ],
            [
                30.13257873656283,
                -4.186569527133817,
                -0.15456013676800986,
                0.0008251840271678537,
                0.00010137256535741174,
                3.654241768257494e-06,
                8.221723937560036e-08,
                3.000097264633111e-10,
                -7.569903678254028e-11,
                -4.369837824924616e-12,
                -1.6834397124162374e-13,
                3.279428011200462e-14,
                9.564998366001348e-16,
            ],
            [
                15.324482081679037,
                -0.176250521623128,
                -0.07877840949788634,
                -0.0012536724398411426,
                6.906258262572552e-06,
                1.1141932559483464e-06,
                4.81366478984805e-08,
                1.233148284339992e-09,
                1.0193555401481437e-11,
                -9.159169149615292e-13,
                -7.091763074220999e-14,
                1.1819605123701667e-14,
                3.0403030520504285e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: -20480.0,
        tt_end: -16384.0,
        coeffs: [
            [
                -26.143495398959505,
                -2.677019418807924,
                0.16908474537659784,
                0.006200729076525682,
                5.51060149263094e-05,
                -3.3991517080030812e-06,
                -2.320572637979869e-07,
                -7.133246745420015e-09,
                -3.795008751694695e-11,
                8.838605061520446e-12,
                5.553164765632783e-13,
                -1.0248212535001445e-14,
                -3.4160708450004818e-15,
            ],
            [
                20.57787161424055,
                -5.3496310215786815,
                -0.13217602783614252,
                0.003134689478833672,
                0.0001926840486943932,
                5.266695223527817e-06,
                2.458667307354727e-08,
                -5.8174106899199476e-09,
                -3.3884170682960335e-10,
                -9.268483416655307e-12,
                2.787513809520393e-14,
                4.1539421475205855e-14,
                9.08674844770128e-15,
            ],
            [
                14.29684946882383,
                -0.8626151989961913,
                -0.09218838008757976,
                -0.0008903295716904744,
                4.352115025259177e-05,
                2.667676977097244e-06,
                7.759421194464267e-08,
                3.340466365058931e-10,
                -9.42977661767285e-11,
                -5.556034265142584e-12,
                -1.594621870446225e-13,
                1.639714005600231e-14,
                3.3819101365504767e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: -16384.0,
        tt_end: -12288.0,
        coeffs: [
            [
                -29.903493307909564,
                -1.0191792224808203,
                0.2453801705368466,
                0.006171054599655817,
                -8.357063831873838e-05,
                -1.1030490326264113e-05,
                -3.648639981599025e-07,
                1.8982263965811468e-09,
                7.656103443528431e-10,
                3.416098173567242e-11,
                1.7216997058802427e-13,
                -9.496676949101339e-14,
                -1.0863105287101531e-14,
            ],
            [
                8.982495174580661,
                -6.196327284596497,
                -0.07269430514345142,
                0.0070114747835540595,
                0.00028328089108980563,
                2.4300756637037816e-06,
                -3.2563805655391104e-07,
                -1.939621195281059e-08,
                -3.3437348616434276e-10,
                2.1410292342457418e-11,
                1.7565436284992476e-12,
                4.598031357370648e-14,
                -5.773159728050814e-15,
            ],
            [
                11.811711963938912,
                -1.626326558331414,
                -0.09661787059583532,
                0.00032833455017621503,
                0.00011357703515321085,
                4.081954466473602e-06,
                8.325387148908284e-09,
                -6.624386372777735e-09,
                -3.3502527248156883e-10,
                -3.6121533115035095e-12,
                4.957402010264699e-13,
                4.283752839630604e-14,
                1.6397140056002313e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: -12288.0,
        tt_end: -8192.0,
        coeffs: [
            [
                -29.773152277340703,
                1.1978240091999028,
                0.3027879042192291,
                0.0026746607907668363,
                -0.00036875977561506417,
                -1.5393996318489546e-05,
                1.781449594335964e-07,
                3.886568687396273e-08,
                1.0123889419096836e-09,
                -5.6043511711742704e-11,
                -4.683843056997061e-12,
                -6.558856022400924e-14,
                7.173748774501011e-15,
            ],
            [
                -3.6707742269177923,
                -6.364300926138567,
                0.0383403133759941,
                0.011316125571660916,
                0.00020846743260008246,
                -1.1862079441644805e-05,
                -7.960385135337316e-07,
                -3.115280682991922e-09,
                1.7045486731494572e-09,
                7.151585306858649e-11,
                -1.5692575444220963e-12,
                -2.532845728025607e-13,
                -6.413673011488404e-15,
            ],
            [
                7.82429060613391,
                -2.346742551106018,
                -0.07926947435423415,
                0.0027250908885228307,
                0.00017616411450578523,
                9.36995593183208e-07,
                -3.0207308039546905e-07,
                -1.2682713819327336e-08,
                2.2684623410476398e-10,
                3.9202555731557926e-11,
                9.2179255681493e-13,
                -5.984956120440844e-14,
                -5.055784850600713e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: -8192.0,
        tt_end: -4096.0,
        coeffs: [
            [
                -24.93763081122893,
                3.628302981918978,
                0.2911684610058404,
                -0.005056159997946106,
                -0.000539069724830199,
                2.58119348145031e-06,
                1.1985900070061898e-06,
                1.1613059095557569e-08,
                -2.9401591588724e-09,
                -7.838816775172465e-11,
                7.218567623987418e-12,
                3.2780615828624624e-13,
                -1.9881532317902802e-14,
            ],
            [
                -15.638522960058262,
                -5.482091829414994,
                0.18319077976414633,
                0.011818716934178916,
                -0.00018828319160217705,
                -2.4447402400741023e-05,
                5.6255289384064504e-08,
                5.97114568388581e-08,
                7.764390156458271e-10,
                -1.5219784407131207e-10,
                -4.6904019130194615e-12,
                3.610103668996509e-13,
                2.3024317495303247e-14,
            ],
            [
                2.6330597245667917,
                -2.803790399496175,
                -0.030570042783250366,
                0.005211351280433126,
                0.00010367951776224515,
                -8.406245448246462e-06,
                -3.435943969684821e-07,
                1.5133128938006077e-08,
                1.1281727005587947e-09,
                -2.3872322921866165e-11,
                -3.638491217718463e-12,
                1.4210854715202004e-14,
                1.3066470982126842e-14,
            ],
        ],
    },
    ChebSegment {
        tt_start: -4096.0,
        tt_end: 0.0,
        coeffs: [
            [
                -15.638485395709854,
                5.582132311838176,
                0.18532548235276855,
                -0.011796326077659867,
                -0.00023084342815538915,
                2.4384868658317442e-05,
                2.5583229866190146e-07,
                -6.210768733493612e-08,
                7.557441851811465e-12,
                1.729687845944192e-10,
                -1.9880165889564804e-12,
                -5.170564830992729e-13,
                1.0043248284301417e-14,
            ],
            [
                -24.74671493683629,
                -3.5343793857313335,
                0.29256476424478434,
                0.005517106777509512,
                -0.0005368321170821516,
                -5.5967169234787225e-06,
                1.2262362973230595e-06,
                7.213744131954277e-10,
                -3.2343662107555597e-09,
                3.411588960051841e-11,
                9.034824170857273e-12,
                -2.298332464516324e-13,
                -2.9993102019104227e-14,
            ],
            [
                -3.0108227550144515,
                -2.784742243899749,
                0.03545061602509926,
                0.005275952154985186,
                -9.795273716566129e-05,
                -9.093822280058762e-06,
                3.055443966000386e-07,
                1.8938655220991105e-08,
                -1.011517634609869e-09,
                -4.147043605953535e-11,
                3.4178215813085444e-12,
                8.412501464669312e-14,
                -1.278784770383149e-14,
            ],
        ],
    },
    ChebSegment {
        tt_start: 0.0,
        tt_end: 4096.0,
        coeffs: [
            [
                -3.460059551483703,
                6.472242914846944,
                0.0373061729556375,
                -0.011783678149941924,
                0.00019735550898785774,
                1.4115932177269577e-05,
                -8.227906061091079e-07,
                -4.054436103090736e-09,
                2.07335031195026e-09,
                -6.120232525902863e-11,
                -3.249571552015158e-12,
                2.7540363152393885e-13,
                -5.807320436500819e-15,
            ],
            [
                -29.367865281524328,
                -1.07388637675836,
                0.3083032040977925,
                -0.002538603062162154,
                -0.0004016114939341483,
                1.5301502114193856e-05,
                3.0996768884961057e-07,
                -4.3387270938392945e-08,
                7.220734779331486e-10,
                8.330648991152255e-11,
                -4.785778611011875e-12,
                -8.471855695601195e-14,
                1.0794783870201522e-14,
            ],
            [
                -8.122136866073308,
                -2.28517287263944,
                0.08496229109322766,
                0.002758505937017584,
                -0.00018478082291404865,
                5.212660112782977e-07,
                3.4463414836457457e-07,
                -1.2316687635605971e-08,
                -3.9940208405543953e-10,
                4.443590794468177e-11,
                -5.125472695838723e-13,
                -1.0951923129071544e-13,
                4.731258120325667e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: 4096.0,
        tt_end: 8192.0,
        coeffs: [
            [
                9.382889367216787,
                6.273492523456965,
                -0.07915807168730897,
                -0.007374682015776257,
                0.0003015646212156835,
                -1.906671388978837e-06,
                -3.988801876148456e-07,
                2.1520563519262535e-08,
                -2.4037916956077565e-10,
                -3.234629658139126e-11,
                2.1021475158879465e-12,
                -3.837955594358041e-14,
                -8.232730736451162e-15,
            ],
            [
                -29.206889821372865,
                1.1855566540236562,
                0.24972984114823651,
                -0.006455176817647922,
                -9.898568994679216e-05,
                1.2287967478003408e-05,
                -3.74732877070563e-07,
                -4.973607850353381e-09,
                9.541282635767017e-10,
                -3.5700126615595837e-11,
                -2.7000623958883807e-13,
                6.121598954240863e-14,
                -1.1887926540601677e-14,
            ],
            [
                -11.941461370467144,
                -1.52024413405774,
                0.10177844623134427,
                0.00020793025183388854,
                -0.00012175182019984295,
                4.408691809433007e-06,
                3.2573901183223617e-09,
                -8.03621306252248e-09,
                3.7014821976719337e-10,
                -1.3936202619263965e-12,
                -7.177164845346012e-13,
                3.088128043880435e-14,
                -1.9471603816502747e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: 8192.0,
        tt_end: 12288.0,
        coeffs: [
            [
                21.07079664845357,
                5.362912479101849,
                -0.14114518177986377,
                -0.003194460724384494,
                0.0002092513698347996,
                -5.712035158576502e-06,
                1.3337293252719134e-08,
                7.33796093973419e-09,
                -4.0089012451552175e-10,
                9.64602756644476e-12,
                1.4210854715202004e-13,
                -8.335212861801176e-15,
                1.3664283380001927e-14,
            ],
            [
                -25.091950427235396,
                2.8620909158761085,
                0.1692798486628347,
                -0.006561604512288983,
                5.8529438441304104e-05,
                3.946834417853586e-06,
                -2.6448089694388096e-07,
                7.726416019802574e-09,
                -2.4934584311827515e-12,
                -1.220083863000372e-11,
                6.818477406620962e-13,
                -4.1402778641405836e-14,
                -6.832141690000964e-16,
            ],
            [
                -14.178939258372717,
                -0.7227120183153299,
                0.09535375227269902,
                -0.0010848394810197921,
                -4.4788067072523485e-05,
                2.9525927948052063e-06,
                -8.654426946026643e-08,
                1.9990819256376058e-10,
                1.2001189785538513e-10,
                -6.713535710262546e-12,
                1.6984704241342394e-13,
                -1.0863105287101531e-14,
                -5.329070518200751e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: 12288.0,
        tt_end: 16384.0,
        coeffs: [
            [
                30.580751560711388,
                4.129019476552644,
                -0.1629669353850098,
                -0.0006950074056921205,
                0.00010874479287482385,
                -4.052618666496353e-06,
                9.102152959555427e-08,
                -1.6037277488906582e-10,
                -9.735829236818133e-11,
                5.405590505128762e-12,
                -1.836479686272259e-13,
                3.539049395420499e-14,
                1.298106921100183e-14,
            ],
            [
                -18.248875215731797,
                3.921402448572911,
                0.09783953955058859,
                -0.005268793720528737,
                9.030456583539822e-05,
                -6.989997667862833e-08,
                -8.661404393706107e-08,
                4.393999830654138e-09,
                -1.2728170654204754e-10,
                1.3593229106425918e-12,
                1.0111569701201425e-13,
                -1.9676568067202774e-14,
                5.6706776027008e-15,
            ],
            [
                -14.9088401609769,
                -0.02034929361531878,
                0.07963784508180047,
                -0.00143458195183891,
                -4.590126879067979e-06,
                1.1992670033796808e-06,
                -5.4451219874898435e-08,
                1.4193757963836946e-09,
                -1.0381849226457863e-11,
                -1.2043699371133698e-12,
                8.758805646581235e-14,
                -1.5440640219402176e-14,
                -1.6055532971502264e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: 16384.0,
        tt_end: 20480.0,
        coeffs: [
            [
                37.52593271802786,
                2.816086779650277,
                -0.16317301882287985,
                0.0005092075650102637,
                4.796454406357061e-05,
                -2.135484463176104e-06,
                6.415522718200988e-08,
                -1.2402272029878356e-09,
                3.886122193272548e-12,
                1.007330970773742e-12,
                -7.51535585900106e-14,
                4.3179135480806086e-14,
                8.608498529401213e-15,
            ],
            [
                -9.806653839103092,
                4.475116016360163,
                0.042967205890972554,
                -0.00391376727665852,
                7.595205565499222e-05,
                -1.0734606289676008e-06,
                -1.077503542800374e-08,
                1.393388242394604e-09,
                -5.938497556948838e-11,
                1.6861725690922378e-12,
                -2.035978223620287e-14,
                -7.31039160830103e-15,
                4.440892098500626e-16,
            ],
            [
                -14.36688175401321,
                0.5480696961182742,
                0.06257825338172925,
                -0.0013746484333202384,
                9.244958214356284e-06,
                3.084864657737923e-07,
                -2.269240877257499e-08,
                8.084598973185236e-10,
                -1.970171034862198e-11,
                2.2300110476163143e-13,
                1.5850568720802235e-14,
                -1.3459319129301897e-14,
                -2.2546067577003178e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: 20480.0,
        tt_end: 24576.0,
        coeffs: [
            [
                41.87944930175092,
                1.5454320407693427,
                -0.15362733282426705,
                0.0010073704035923252,
                1.8008409803918276e-05,
                -9.770790049182883e-07,
                3.4303198503948806e-08,
                -8.388263075595694e-10,
                1.5062959426778925e-11,
                -5.902970420160833e-14,
                -2.814842376280397e-14,
                4.8644848832806856e-14,
                4.099285014000578e-15,
            ],
            [
                -0.6479254900056759,
                4.649981270500342,
                0.00256775323460172,
                -0.0028742964552838346,
                5.4156519426648775e-05,
                -1.0303851307906616e-06,
                9.20682128826054e-09,
                2.4931161408840824e-10,
                -1.8180943929844664e-11,
                6.795931339043959e-13,
                -2.3605049538953328e-14,
                5.60235618580079e-15,
                -1.4005890464501974e-15,
            ],
            [
                -12.820369510252593,
                0.9855372557189214,
                0.047095916300818615,
                -0.001200438815365929,
                1.1470146723159867e-05,
                -2.710736824750571e-08,
                -7.463035864510367e-09,
                3.30531909534889e-10,
                -1.021118232704164e-11,
                2.2792024677843216e-13,
                -1.3664283380001927e-16,
                -1.2434497875801753e-14,
                -2.1862853408003084e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: 24576.0,
        tt_end: 28672.0,
        coeffs: [
            [
                43.78221452586115,
                0.36843507835370615,
                -0.14032961635723057,
                0.0011768513981182266,
                5.0627414750054486e-06,
                -3.850772954522724e-07,
                1.689574101139722e-08,
                -4.330998465845299e-10,
                9.835551176925387e-12,
                -1.4921397450962104e-13,
                -1.694371139120239e-14,
                4.126613580760582e-14,
                6.148927521000867e-15,
            ],
            [
                8.572775377162724,
                4.545807299720175,
                -0.0273617653653705,
                -0.002159213103643728,
                3.606351312048271e-05,
                -7.73242455227756e-07,
                1.0857619009003043e-08,
                -5.682879807759141e-11,
                -3.742373932114928e-12,
                2.0547666132677897e-13,
                -6.285570354800886e-15,
                1.3681363734226929e-14,
                -2.843878978462901e-15,
            ],
            [
                -10.51600095522036,
                1.307712214377313,
                0.03374956694660014,
                -0.001028412826532697,
                9.7252454565386e-06,
                -1.2524779326493166e-07,
                -1.7030441330671937e-09,
                1.127605359512857e-10,
                -4.132079294112583e-12,
                1.0767455303441518e-13,
                4.099285014000578e-15,
                -9.018427030801271e-15,
                -3.142785177400443e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: 28672.0,
        tt_end: 32768.0,
        coeffs: [
            [
                43.441833395475214,
                -0.6967961913269304,
                -0.12591402533212423,
                0.0012147277983044747,
                5.966904410570351e-07,
                -9.44324708685739e-08,
                8.393586680400544e-09,
                -1.9869453091394881e-10,
                5.186961971048731e-12,
                -9.018427030801271e-14,
                -2.2955996078403237e-14,
                3.6893565126005203e-14,
                1.0794783870201522e-14,
            ],
            [
                17.36965102065627,
                4.23199346005863,
                -0.050276608810966156,
                -0.0016924703794772929,
                2.3028788083168958e-05,
                -5.400311478682013e-07,
                8.397609991998952e-09,
                -9.86307104365271e-11,
                2.1589567740403043e-13,
                5.192427684400732e-14,
                -4.9191420168006935e-15,
                1.8925032481302667e-14,
                5.465713352000771e-16,
            ],
            [
                -7.667924331375043,
                1.530789780905688,
                0.022254757158337888,
                -0.0008942230402818351,
                7.003645908007718e-06,
                -1.40056147739205e-07,
                9.107900758373524e-11,
                2.90930356728635e-11,
                -1.4945993161046107e-12,
                4.4135635317406224e-14,
                4.235927847800597e-15,
                -4.782499183000675e-15,
                -2.801178092900395e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: 32768.0,
        tt_end: 36864.0,
        coeffs: [
            [
                41.08714821115119,
                -1.6457197388513878,
                -0.11131131870081062,
                0.001218519415899139,
                3.565840584175161e-07,
                5.6186749475273245e-08,
                4.708843229869112e-09,
                -7.759837217236054e-11,
                2.6727338291283767e-12,
                -4.0446278804805704e-14,
                -1.6123854388402273e-14,
                4.126613580760582e-14,
                9.838284033601387e-15,
            ],
            [
                25.3710336476469,
                3.7540515924144415,
                -0.06869893441315994,
                -0.0014003729451269682,
                1.4029159537734324e-05,
                -3.696693194290044e-07,
                5.911479989278562e-09,
                -7.484419921428735e-11,
                1.0409451078885468e-12,
                1.5303997385602157e-14,
                -1.5850568720802235e-14,
                1.8446782563002602e-14,
                -3.006142343600424e-15,
            ],
            [
                -4.461081701118445,
                1.667599047797488,
                0.01210493689571666,
                -0.0008042589424393808,
                4.26772461923865e-06,
                -1.322853259412026e-07,
                4.255589385156082e-10,
                2.6781995424803776e-14,
                -4.798213108887677e-13,
                1.6533782889802332e-14,
                6.148927521000867e-16,
                -6.1147668125508625e-15,
                -4.7141777661006645e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: 36864.0,
        tt_end: 40960.0,
        coeffs: [
            [
                36.95166995973762,
                -2.477502091017598,
                -0.09659951836369028,
                0.0012387727564635918,
                2.478725035687673e-06,
                1.5148272106776298e-07,
                3.5279578233152837e-09,
                -1.262743755712738e-11,
                1.5446105932754178e-12,
                -1.0384855368801464e-14,
                -2.3229281746003275e-14,
                3.716685079360524e-14,
                1.1477998039201619e-14,
            ],
            [
                32.278683929906684,
                3.140543076230755,
                -0.08437740165054099,
                -0.001227987750498235,
                7.904881720959951e-06,
                -2.4902709474015586e-07,
                4.3058785938508386e-09,
                -3.914871845504072e-11,
                1.1734886566745655e-12,
                -8.198570028001156e-16,
                -4.372570681600617e-15,
                2.842170943040401e-14,
                -6.832141690000964e-16,
            ],
            [
                -1.0589168888955944,
                1.7267973613316239,
                0.002777958699863935,
                -0.0007566112310256356,
                1.7171451143045583e-06,
                -1.2335925655330234e-07,
                2.8038132499502283e-10,
                -8.409375759846136e-12,
                -1.0087657205286423e-13,
                3.0403030520504285e-15,
                5.414472289325763e-15,
                -3.774758283725532e-15,
                -4.748338474550669e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: 40960.0,
        tt_end: 45056.0,
        coeffs: [
            [
                31.27158938560173,
                -3.1899030040589387,
                -0.08138150945729286,
                0.0013072431488548265,
                6.352992470007953e-06,
                2.369662226442415e-07,
                3.784230364964549e-09,
                2.8740360518825652e-11,
                1.113912381137757e-12,
                1.120471237160158e-14,
                -1.7216997058802426e-14,
                3.197442310920451e-14,
                1.0658141036401503e-14,
            ],
            [
                37.83937758336491,
                2.4083870036458683,
                -0.09850138606833635,
                -0.001136033431982661,
                3.891586090368002e-06,
                -1.5442531410879104e-07,
                3.765366548472789e-09,
                2.0173947982234843e-12,
                1.460985178989806e-12,
                1.3664283380001927e-14,
                -1.2297855042001734e-14,
                3.552713678800501e-14,
                -2.7328566760003855e-16,
            ],
            [
                2.3883576064275687,
                1.7129852107797559,
                -0.00621699106161848,
                -0.0007485924911088127,
                -7.027587053313274e-07,
                -1.1960129391137724e-07,
                3.456453926494655e-11,
                -8.026639182372282e-12,
                1.1975036347149187e-13,
                2.4339504770628432e-15,
                2.2674170233690697e-15,
                1.1657341758564144e-15,
                -2.0026715328815326e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: 45056.0,
        tt_end: 49152.0,
        coeffs: [
            [
                24.291884946949008,
                -3.776085501983356,
                -0.06491140548897953,
                0.0014520838784701613,
                1.208573119599193e-05,
                3.412870483998631e-07,
                5.0583739590155554e-09,
                6.129578895734784e-11,
                9.174199861333293e-13,
                -5.465713352000771e-16,
                -1.7763568394002505e-14,
                2.1589567740403043e-14,
                3.75767792950053e-15,
            ],
            [
                41.82558407507153,
                1.5667024996486298,
                -0.11184591502769173,
                -0.001093445041448149,
                1.7409598685757233e-06,
                -5.752673797150447e-08,
                4.5748015290533095e-09,
                6.03059482693005e-11,
                2.3158227472427264e-12,
                4.3179135480806086e-14,
                -1.7763568394002505e-14,
                4.727842049480667e-14,
                2.3229281746003276e-15,
            ],
            [
                5.735890792418737,
                1.626943853391136,
                -0.01534654042179,
                -0.000778993492310416,
                -3.1014802573691413e-06,
                -1.2079993176701447e-07,
                -9.660170099743062e-11,
                3.6135197398415097e-13,
                4.4531899535426277e-13,
                1.4928229592652104e-14,
                -3.416070845000482e-17,
                9.71872155402637e-15,
                -8.881784197001252e-16,
            ],
        ],
    },
    ChebSegment {
        tt_start: 49152.0,
        tt_end: 53248.0,
        coeffs: [
            [
                16.278293209325263,
                -4.221824665921611,
                -0.0460778243224355,
                0.0017072963771018234,
                2.028014068582269e-05,
                4.862329479220324e-07,
                7.121282298892486e-09,
                8.276155829032807e-11,
                2.6918638258603797e-13,
                -4.2085992810405936e-14,
                -1.2844426377201811e-14,
                9.974926867401406e-15,
                -4.5092135154006356e-15,
            ],
            [
                44.022974013497645,
                0.6198781989201314,
                -0.1248167971230513,
                -0.001068085797528467,
                1.874437268375354e-06,
                8.2355626318531e-08,
                7.54603600118851e-09,
                1.6228796084760688e-10,
                4.286212410639005e-12,
                8.909112763761256e-14,
                -2.213613907560312e-14,
                4.727842049480667e-14,
                1.0794783870201522e-14,
            ],
            [
                8.836687476245825,
                1.4657519640852406,
                -0.02507224622507797,
                -0.0008480317572523433,
                -5.529177682953664e-06,
                -1.208198453420769e-07,
                2.0940418629869292e-10,
                2.572847917620563e-11,
                1.2582072136305773e-12,
                4.071956447240574e-14,
                -3.552713678800501e-15,
                1.1238873080051584e-14,
                5.004543787925706e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: 53248.0,
        tt_end: 57344.0,
        coeffs: [
            [
                7.535319922105327,
                -4.502177519441598,
                -0.02329023066458082,
                0.0021196463400810963,
                3.189945743533083e-05,
                6.841569097231898e-07,
                9.249936338252295e-09,
                5.4019148128995415e-11,
                -2.7064846090769815e-12,
                -1.5864233004182237e-13,
                -1.994985373480281e-14,
                3.2794280112004626e-15,
                1.0623980327951498e-14,
            ],
            [
                44.22409687576207,
                -0.429216409199431,
                -0.13736267897681279,
                -0.001013217195049466,
                5.793111160283633e-06,
                3.3644622021711257e-07,
                1.4504680533578862e-08,
                3.545427882902284e-10,
                8.045530054145135e-12,
                1.3937569047601966e-13,
                -1.8856711064402658e-14,
                4.427227815120624e-14,
                1.0931426704001542e-14,
            ],
            [
                11.534207656165716,
                1.2227842708149632,
                -0.035857380242129505,
                -0.0009552121390956796,
                -7.807457215573795e-06,
                -1.0114783048738201e-07,
                1.7404818099573907e-09,
                9.441445915679371e-11,
                3.3276629315318693e-12,
                9.319041265161314e-14,
                6.832141690000964e-17,
                1.106806953780156e-14,
                -5.124106267500722e-16,
            ],
        ],
    },
    ChebSegment {
        tt_start: 57344.0,
        tt_end: 61440.0,
        coeffs: [
            [
                -1.5679498546976827,
                -4.576959846516887,
                0.00569929243328897,
                0.0027518203871399814,
                4.784653528331863e-05,
                9.076703323310871e-07,
                8.364196446564165e-09,
                -1.7322652713967448e-10,
                -1.3581956072637414e-11,
                -5.011375929615707e-13,
                -2.9753977059954195e-14,
                -7.190829128726014e-15,
                -1.1682962289901647e-14,
            ],
            [
                42.22979876337378,
                -1.5745231740992671,
                -0.1486712155187309,
                -0.0008438251873992788,
                1.697690930987287e-05,
                8.373368667837265e-07,
                2.8779435996721777e-08,
                6.90791287419975e-10,
                1.2796328099704204e-11,
                1.0111569701201425e-13,
                -3.0334709103604277e-14,
                4.2085992810405936e-14,
                6.8321416900009635e-15,
            ],
            [
                13.65503132920725,
                0.8878179074257838,
                -0.048125777595980315,
                -0.0010928872363377396,
                -9.121926641324326e-06,
                -1.2133288425257678e-08,
                6.464210363569341e-09,
                2.678808969519126e-10,
                8.08829926112454e-12,
                1.836479686272259e-13,
                -5.465713352000771e-16,
                1.496239030110211e-14,
                6.388052480150901e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: 61440.0,
        tt_end: 65536.0,
        coeffs: [
            [
                -10.561573022768263,
                -4.384826010858568,
                0.04394160453428638,
                0.0036707062729973107,
                6.727250333668714e-05,
                9.79599738488883e-07,
                -6.259897215972369e-09,
                -1.0371292201118474e-09,
                -4.5367333821279596e-11,
                -1.3382115928204886e-12,
                -2.6986959675503804e-14,
                -8.198570028001155e-15,
                1.4347497549002023e-15,
            ],
            [
                37.86359144455641,
                -2.7982261019849615,
                -0.15647310457983876,
                -0.00039326242527037124,
                4.244248406319702e-05,
                1.8073949399002652e-06,
                5.3892592269186515e-08,
                1.0789591442517121e-09,
                7.498412147609858e-12,
                -5.930298986920837e-13,
                -6.17625608776087e-14,
                4.3998992483606205e-14,
                5.055784850600713e-15,
            ],
            [
                15.002411294640307,
                0.44792334850121607,
                -0.06208841325712719,
                -0.0012291886189304845,
                -7.026051694498829e-06,
                2.690467869005995e-07,
                1.871235911520531e-08,
                6.49442619340754e-10,
                1.601290040735666e-11,
                2.1739874857583066e-13,
                -1.2024569374401695e-14,
                1.6055532971502264e-14,
                1.1273033788501589e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: 65536.0,
        tt_end: 69632.0,
        coeffs: [
            [
                -18.826379182018915,
                -3.83742838676284,
                0.09503287317033363,
                0.004882178294845556,
                8.194889828034163e-05,
                2.6576522589476343e-07,
                -6.413397812821131e-08,
                -3.426309492537117e-09,
                -1.0671149434179264e-10,
                -1.6915016396104386e-12,
                3.197442310920451e-14,
                -5.807320436500819e-15,
                -3.1086244689504383e-15,
            ],
            [
                31.010689494582795,
                -4.054087662868545,
                -0.15566882867854523,
                0.0006556503946025207,
                9.397788762955682e-05,
                3.456550023573667e-06,
                8.129752652271586e-08,
                5.328316249758175e-10,
                -6.043931167508933e-11,
                -3.805776206998137e-12,
                -1.552262591968219e-13,
                3.744013646120528e-14,
                3.142785177400443e-15,
            ],
            [
                15.35388333256005,
                -0.10909342902783664,
                -0.07723700407026832,
                -0.0012668611639631204,
                4.6405000146111115e-06,
                9.990690523081341e-07,
                4.471110633866934e-08,
                1.199010805171733e-09,
                1.3291521729395473e-11,
                -6.796614553212959e-13,
                -5.752663302980812e-14,
                1.3527640546201907e-14,
                1.673874714050236e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: 69632.0,
        tt_end: 73728.0,
        coeffs: [
            [
                -25.53990857215363,
                -2.8208622083736237,
                0.1612835737367019,
                0.006112163079449737,
                6.194349691121751e-05,
                -2.8444117417664597e-06,
                -2.1201785271019756e-07,
                -6.984152196747136e-09,
                -6.762945758964634e-11,
                6.754801846070153e-12,
                4.867217739956686e-13,
                -9.564998366001348e-16,
                -3.75767792950053e-15,
            ],
            [
                21.704021139977513,
                -5.236460017915186,
                -0.13615436873573336,
                0.0028174772653200694,
                0.00018201353186788957,
                5.200553274584343e-06,
                4.030361056860644e-08,
                -4.755909034114525e-09,
                -3.051898562926698e-10,
                -9.296631840418111e-12,
                -3.2247708776804546e-14,
                5.110441984120721e-14,
                1.13413552054016e-14,
            ],
            [
                14.471826076693059,
                -0.7845805740242592,
                -0.09111332808335112,
                -0.0009626508188177879,
                3.815548278041092e-05,
                2.480938991748889e-06,
                7.64833748471224e-08,
                6.201390170610046e-10,
                -7.489940291914256e-11,
                -4.9378620850312965e-12,
                -1.5795911587282227e-13,
                1.694371139120239e-14,
                4.338409973150612e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: 73728.0,
        tt_end: 77824.0,
        coeffs: [
            [
                -29.65139384082805,
                -1.2268141908762462,
                0.2376203265499283,
                0.006305209949143904,
                -6.140059502366915e-05,
                -1.0137361656986217e-05,
                -3.681605415058934e-07,
                -4.469117042250358e-10,
                6.424175379694274e-10,
                3.311265791475867e-11,
                4.2605235578846006e-13,
                -7.392377308581042e-14,
                -1.2229533625101725e-14,
            ],
            [
                10.289110157560915,
                -6.133020743068562,
                -0.08144850834330833,
                0.006545458222350002,
                0.00027798849434427315,
                3.1889150788034526e-06,
                -2.7154943237607e-07,
                -1.8232859734832974e-08,
                -4.0312970056150404e-10,
                1.459960357736306e-11,
                1.5428342364360176e-12,
                7.58367727590107e-14,
                -6.183088229450872e-15,
            ],
            [
                12.147398557263491,
                -1.5448961820927716,
                -0.09704272637758858,
                0.00014305084610063328,
                0.00010529458381469681,
                4.050930160614231e-06,
                2.618177046105512e-08,
                -5.557638178725728e-09,
                -3.194740882096224e-10,
                -5.4214410738495644e-12,
                3.5349501104064984e-13,
                4.618527782440651e-14,
                9.906605450501397e-16,
            ],
        ],
    },
    ChebSegment {
        tt_start: 77824.0,
        tt_end: 81920.0,
        coeffs: [
            [
                -29.988255774127385,
                0.9417676338729601,
                0.29926248112721343,
                0.0032723413795762413,
                -0.00033691049051043365,
                -1.5740961041698345e-05,
                7.08019970173924e-08,
                3.533610409406789e-08,
                1.1898841570165621e-09,
                -3.7327816051821665e-11,
                -4.428594243458624e-12,
                -1.1259369505121588e-13,
                8.745141363201234e-15,
            ],
            [
                -2.3252394733321893,
                -6.393199170347521,
                0.024227510940680378,
                0.010960701177898439,
                0.00023159684120699353,
                -9.919856210580327e-06,
                -7.815518654816436e-07,
                -8.328946831371608e-09,
                1.4354480681023374e-09,
                7.605895400676953e-11,
                -5.071157169403215e-13,
                -2.2438461345385664e-13,
                -4.588637162546897e-14,
            ],
            [
                8.310903174565233,
                -2.279702769908422,
                -0.0826302374129776,
                0.002435590279454767,
                0.00017384793373737424,
                1.6472284585233865e-06,
                -2.653395710329785e-07,
                -1.3250166639103064e-08,
                8.953152749095003e-11,
                3.4995049593187735e-11,
                1.176289834767466e-12,
                -3.6551958041505153e-14,
                -1.694371139120239e-14,
            ],
        ],
    },
    ChebSegment {
        tt_start: 81920.0,
        tt_end: 86016.0,
        coeffs: [
            [
                -25.665202023989465,
                3.3798650871248594,
                0.2971430996694944,
                -0.004158837391692316,
                -0.0005421501173980931,
                -3.3100847164090595e-07,
                1.154539483777101e-06,
                2.0790493566052575e-08,
                -2.609792860452077e-09,
                -1.0481598495131877e-10,
                5.486756348405974e-12,
                3.6852572275865195e-13,
                -2.8558352264204026e-14,
            ],
            [
                -14.470912132780134,
                -5.631888065862763,
                0.16820905953346957,
                0.012100883656633353,
                -0.00013790842052507912,
                -2.4422732575310683e-05,
                -1.1119914944401899e-07,
                5.644476352983929e-08,
                1.3022619563903741e-09,
                -1.3034004644815958e-10,
                -6.1471511641614666e-12,
                2.785464167013393e-13,
                4.147110005830585e-14,
            ],
            [
                3.2162879483680267,
                -2.7768381221457252,
                -0.037041298483854984,
                0.005031276457708272,
                0.00012034654022772775,
                -7.52494741390181e-06,
                -3.826811709910334e-07,
                1.1355966833548337e-08,
                1.193118834499693e-09,
                -9.102189087920683e-12,
                -3.573278425287404e-12,
                -2.4868995751603507e-14,
                2.1811612345328074e-14,
            ],
        ],
    },
    ChebSegment {
        tt_start: 86016.0,
        tt_end: 90112.0,
        coeffs: [
            [
                -16.784493573010494,
                5.419397725659753,
                0.19992387150538787,
                -0.011377013495367495,
                -0.00028049693678101363,
                2.356629084615109e-05,
                4.3340687264722317e-07,
                -6.121278253509935e-08,
                -6.378744370312444e-10,
                1.7698581062247215e-10,
                3.574576532208504e-13,
                -5.506706202140776e-13,
                1.298106921100183e-14,
            ],
            [
                -23.979026604483938,
                -3.778163657954486,
                0.2851211405849964,
                0.006398016676312816,
                -0.0005226215924938498,
                -8.607837872777789e-06,
                1.2108980610693065e-06,
                1.143229456400919e-08,
                -3.298382558533866e-09,
                -4.1479298628333845e-12,
                9.694125843942367e-12,
                -9.373698398681321e-14,
                -3.955810038510558e-14,
            ],
            [
                -2.4285153515726816,
                -2.8128033288610674,
                0.028759269068035206,
                0.0054263861698437,
                -7.861911726874799e-05,
                -9.78995928620112e-06,
                2.47413509679717e-07,
                2.2017797832815013e-08,
                -8.374980879739706e-10,
                -5.4634890628718194e-11,
                2.919070967849918e-12,
                1.3600659060513792e-13,
                -1.596479358968194e-14,
            ],
        ],
    },
    ChebSegment {
        tt_start: 90112.0,
        tt_end: 94208.0,
        coeffs: [
            [
                -4.808285150813649,
                6.433070354484405,
                0.05231558849558236,
                -0.01208501037198208,
                0.00016627300920837648,
                1.61262893825573e-05,
                -8.020250741826483e-07,
                -1.1166980366047378e-08,
                2.2742160974932912e-09,
                -4.552966550783402e-11,
                -4.521852977527137e-12,
                2.7185091784513835e-13,
                1.5406479510952173e-14,
            ],
            [
                -29.11391906199677,
                -1.3353345445745548,
                0.3109824707359147,
                -0.0018471261449956972,
                -0.00043228364123028593,
                1.4394178480669185e-05,
                4.3724618483163516e-07,
                -4.5268543238727524e-08,
                3.8288825101937196e-10,
                1.0230230338073362e-10,
                -4.383228822637018e-12,
                -1.6055532971502264e-13,
                8.881784197001252e-15,
            ],
            [
                -7.640957766813944,
                -2.355665266539165,
                0.08132135408892452,
                0.003065706450518026,
                -0.00018506801287242726,
                -3.6653873905287617e-07,
                3.7822478181882303e-07,
                -1.0767022623908291e-08,
                -5.658771912591803e-10,
                4.565995444986234e-11,
                -5.60235618580079e-15,
                -1.318944953254686e-13,
                -1.6226336513752287e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: 94208.0,
        tt_end: 98304.0,
        coeffs: [
            [
                8.060935226725714,
                6.334438885891538,
                -0.06947940642558989,
                -0.007875713454381273,
                0.00030435753243831864,
                -8.485179840465553e-07,
                -4.6161123764457773e-07,
                2.2113983874852202e-08,
                -1.0614507563498311e-10,
                -4.118010206337448e-11,
                2.2378509302055905e-12,
                -2.5791334879753638e-14,
                -2.629093524083496e-14,
            ],
            [
                -29.434339642329533,
                0.9699397257816855,
                0.25761682274934555,
                -0.006265531184465745,
                -0.0001252081488155673,
                1.3190019796109727e-05,
                -3.560550872258808e-07,
                -8.300494650589266e-09,
                1.0829704312807455e-09,
                -3.369448310107915e-11,
                -7.269398758161025e-13,
                8.102920044341142e-14,
                -1.1273033788501589e-14,
            ],
            [
                -11.619465121348707,
                -1.6062272940964972,
                0.10136962460160248,
                0.0004176827107635553,
                -0.00013081915099496437,
                4.373504611047215e-06,
                2.7965681326236336e-08,
                -9.256158506332213e-09,
                3.700859106349806e-10,
                1.8908635341246668e-12,
                -9.020476673308272e-13,
                3.2589315861304596e-14,
                5.021624142150708e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: 98304.0,
        tt_end: 102400.0,
        coeffs: [
            [
                19.930418545159277,
                5.4791271720823165,
                -0.13674814498037227,
                -0.0035521908431699846,
                0.00022094610669917906,
                -5.715830466029432e-06,
                -9.616981945835224e-09,
                8.706902686019301e-09,
                -4.352661820715954e-10,
                8.838058490185246e-12,
                2.4295095849643426e-13,
                -2.4800674334703497e-14,
                2.5518049212153597e-14,
            ],
            [
                -25.68443848050767,
                2.712946510839301,
                0.17753306327862964,
                -0.006646197786735159,
                4.9642618158976314e-05,
                4.624585526012372e-06,
                -2.8657279161647097e-07,
                7.660243174821236e-09,
                4.7287712207505065e-11,
                -1.5059953284435323e-11,
                7.356850171793037e-13,
                -4.727842049480667e-14,
                3.2794280112004626e-15,
            ],
            [
                -14.02588675725268,
                -0.8042622776413558,
                0.09664305990509912,
                -0.0010042315037828496,
                -5.109391848169874e-05,
                3.166397316516185e-06,
                -8.656641926362542e-08,
                -2.326620263969604e-10,
                1.4594561456795838e-10,
                -7.366551812992839e-12,
                1.56046116199622e-13,
                -6.490534605500915e-15,
                -5.704838311150805e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: 102400.0,
        tt_end: 106496.0,
        coeffs: [
            [
                29.696538286031423,
                4.266275346755162,
                -0.1618094504202432,
                -0.0008854642703331942,
                0.00011729129727801644,
                -4.275284142570749e-06,
                9.096648876895695e-08,
                1.915535764195598e-10,
                -1.184701567616195e-10,
                6.090171102466859e-12,
                -1.6752411423882362e-13,
                1.8993353898202677e-14,
                1.4689104633502073e-14,
            ],
            [
                -19.077982159574553,
                3.832655479819861,
                0.10458231092555792,
                -0.005414357721183303,
                9.011980072688612e-05,
                1.6015866923278457e-07,
                -9.979667608534398e-08,
                4.8176860791325175e-09,
                -1.3158868866342416e-10,
                9.119542727813285e-13,
                1.5058040284762124e-13,
                -3.6073708123205084e-14,
                6.490534605500915e-15,
            ],
            [
                -14.906516201644722,
                -0.08912090896852695,
                0.08142227901063383,
                -0.0014234091041837123,
                -7.217592322916744e-06,
                1.3384994776817375e-06,
                -5.857101197211005e-08,
                1.4462958010706364e-09,
                -5.376075653027958e-12,
                -1.5507595207964187e-12,
                9.660648349661363e-14,
                -1.6055532971502264e-14,
                -3.484392261900491e-15,
            ],
        ],
    },
    ChebSegment {
        tt_start: 106496.0,
        tt_end: 110592.0,
        coeffs: [
            [
                36.91967860812388,
                2.9554583432731003,
                -0.16362129771624723,
                0.00042204489136729795,
                5.253682950067374e-05,
                -2.2971422480439355e-06,
                6.769509315500517e-08,
                -1.2461372788353542e-09,
                -2.169888200744306e-13,
                1.2726913540133794e-12,
                -9.920269733881399e-14,
                3.2247708776804546e-14,
                1.2024569374401695e-14,
            ],
            [
                -10.764707992064007,
                4.433530369788718,
                0.048051719065303575,
                -0.004039027279071333,
                7.805003571093039e-05,
                -1.0405021085419391e-06,
                -1.5064645326062347e-08,
                1.5976512420715712e-09,
                -6.576073019459727e-11,
                1.816119904036056e-12,
                -4.481884948640632e-14,
                -2.063306790380291e-14,
                -3.75767792950053e-16,
            ],
            [
                -14.487786613389535,
                0.49357408613018505,
                0.06432024072418503,
                -0.0013881450325225859,
                8.530322717184355e-06,
                3.6749079376144994e-07,
                -2.5105121127265963e-08,
                8.743280287804877e-10,
                -2.0464177361226084e-11,
                1.8214489745542567e-13,
                1.5987211554602254e-14,
                -1.667042572360235e-14,
                -2.288767466150323e-15,
            ],
        ],
    },
];
