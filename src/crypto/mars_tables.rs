//! MARS S-box and key-fixing constants. `S` doubles as the two
//! 256-entry byte-lookup tables: S0 is the first half, S1 the second.

pub static S: [u32; 512] = [
    0x09d0c479, 0x28c8ffe0, 0x84aa6c39, 0x9dad7287,
    0x7dff9be3, 0xd4268361, 0xc96da1d4, 0x7974cc93,
    0x85d0582e, 0x2a4b5705, 0x1ca16a62, 0xc3bd279d,
    0x0f1f25e5, 0x5160372f, 0xc695c1fb, 0x4d7ff1e4,
    0xae5f6bf4, 0x0d72ee46, 0xff23de8a, 0xb1cf8e83,
    0xf14902e2, 0x3e981e42, 0x8bf53eb6, 0x7f4bf8ac,
    0x83631f83, 0x25970205, 0x76afe784, 0x3a7931d4,
    0x4f846450, 0x5c64c3f6, 0x210a5f18, 0xc6986a26,
    0x8e608da5, 0x65582baf, 0x65928c99, 0xb43765b9,
    0x488d56d9, 0xa896f9b2, 0x83b0ce22, 0xd4eca018,
    0x5d1f8d8f, 0x396940d8, 0x3f3b4441, 0xa1dabc98,
    0x3f71303c, 0x37a12c67, 0x57956b51, 0xa519f3ee,
    0xf7ebb5dc, 0xab5edbf4, 0x742c1f64, 0x0fdc7404,
    0xaaca21ea, 0x3015c4b1, 0x98f7bef0, 0x8a18a5e4,
    0x4a293c76, 0xd95e9e05, 0x5959520a, 0x101d5b46,
    0xd5cd197c, 0xaab6e3ad, 0xaeac614c, 0x723bf1ce,
    0x8c44ce2f, 0xa5a5b90f, 0x420e59ed, 0xaf4413f4,
    0x8a6a2849, 0x230e90f8, 0xd32ce670, 0xb3baf1a1,
    0x5c5a4ba6, 0xb0fea711, 0xe78a16ff, 0x0fe12ef5,
    0x6dcce6aa, 0xd2221ae6, 0xbeacd979, 0x95fe9cb8,
    0x8b5e4e0c, 0x11620723, 0x614fb3e0, 0x714cf759,
    0x1b53b1ca, 0xc032289f, 0x2110cbef, 0x35cbccf9,
    0xc6cd90b3, 0xefa2911e, 0x0da0f41e, 0x77448c6f,
    0x3feafe6b, 0x64d26178, 0x3753d5c6, 0xf08d5553,
    0x1ec41040, 0x05479ae6, 0x357f1c8b, 0x0b2ce87c,
    0x52474ecd, 0xc848d342, 0x963fb012, 0x6785c18c,
    0x2931e496, 0xa1c6e6a7, 0xdf553dee, 0x65f0f2da,
    0x0eda6eef, 0x23f242ec, 0x1e51105b, 0xb717a0b6,
    0x232967f6, 0xf523a3bd, 0xabdc21f7, 0xd3b816c6,
    0xfd7770b6, 0x7f5699c6, 0x21aff1d1, 0x2d227d7b,
    0x3328ab9d, 0xed380eb0, 0x71216027, 0xf9907815,
    0x24c6c8dc, 0x467bf072, 0x36c02548, 0x7f4eb3fc,
    0x8f1d8be4, 0xf2438e54, 0xf2a0bd90, 0x474b2c39,
    0x7b4fb6bf, 0x3e9a1e13, 0xd650575f, 0x4bc0f942,
    0xc9faf5f6, 0x7fcbb4d4, 0x23773ffc, 0x55936ab8,
    0x204aad9a, 0xcac33ba6, 0x1b4202dd, 0x38286571,
    0xa44db972, 0x7f1de8a3, 0x8334dd47, 0x0b1a1029,
    0x6afd8066, 0x84d48ede, 0xb4e7cf79, 0xec11f65d,
    0x899dd930, 0x65c3cdcd, 0x93361df0, 0x418e8334,
    0xace133c0, 0xd9b7a70c, 0x87900547, 0x602c7dbb,
    0x1cf624b6, 0xd4719846, 0x085c54ba, 0xdba1ee3f,
    0x2aa9dc8c, 0x3632d610, 0xf2eced68, 0x877a83c8,
    0x377ee169, 0x81252cc0, 0xb31aed5e, 0x389a1ac6,
    0x039e03c7, 0xbf36c4b4, 0x93ae9be4, 0x5a954a2d,
    0x89c2eb65, 0x416a0772, 0x310cb1b0, 0x4066a78d,
    0x067ef506, 0xc3157449, 0xde103267, 0xd3cb7769,
    0x19e736ba, 0x19312d62, 0xaf3316ac, 0x7138fbbf,
    0xa7aabf98, 0xfb613134, 0x75bc2d77, 0xf2441abe,
    0x536fa4d7, 0x5957f28d, 0x47c620ce, 0xf82b8501,
    0x99f7c9c4, 0x79204dc3, 0x639aa46f, 0xd5fca364,
    0x7390762c, 0xd7ecd846, 0xd063f8b4, 0x41d0cece,
    0x592d7b8a, 0x3dd45424, 0x5d417e0c, 0x22982ecc,
    0xcf7610ec, 0xa0195d79, 0xfd712ce2, 0xc54d1214,
    0x86fb93f3, 0x6434bf91, 0x8b1a2832, 0x0d9de8bc,
    0xa1cc2fd9, 0xa2d4a582, 0xfafb28b0, 0x62418f86,
    0x259dad9e, 0x95ea94a9, 0x288535d6, 0x49c9ebe9,
    0xe22ac7d3, 0xe0cfaddb, 0xbbec2b41, 0xee069463,
    0xadd7aee6, 0x59631e83, 0x6cdf189a, 0x764ff0fc,
    0x8256ae54, 0xa41cb6da, 0x6a3a1899, 0x0c0cadad,
    0xae916f51, 0xec1ad36c, 0x789602b7, 0xa0d76437,
    0xc665e1ff, 0x311da692, 0x3c3b2ad5, 0x75556ac5,
    0xd9b97ea3, 0x3bc1d735, 0x25c98366, 0xa10c7f34,
    0xf3b7e061, 0xf8c3303c, 0x465b149e, 0xbdd019ba,
    0x6207dfe9, 0xa6acd194, 0xaf57b4bb, 0x61dff33b,
    0x68a34007, 0x14d7aa96, 0xd12650d4, 0x7ca7740a,
    0xd6e9de39, 0x48ff9d6e, 0xd1121827, 0xd0c094ac,
    0x88fbc546, 0xfa3cd08f, 0x658d13b9, 0x38b058c4,
    0x46b0e310, 0x008b0159, 0x74a23029, 0x6646263a,
    0xf2a7d83a, 0x3db301aa, 0xed4b8249, 0x3d5f75c8,
    0xaf259b5b, 0x95905afc, 0x473d26fb, 0x9fa4d64a,
    0xa8df0b7c, 0x7fa55b24, 0x4cf799c4, 0x46278243,
    0x7b9897f4, 0x45a24ba7, 0x9603144c, 0x65d72f29,
    0x867ba930, 0x98e7c35e, 0x710a5018, 0x5a20fe1c,
    0xf988c14d, 0xd583223d, 0x895f813f, 0x5673ede3,
    0x523c9884, 0xe4a37a52, 0xf6c68b66, 0xd2e14ed3,
    0x9c513a8e, 0xdb1446ce, 0x2a784a28, 0x44962d76,
    0xa62d10aa, 0x83320476, 0xb42810a8, 0x71943d76,
    0x316a4b0b, 0x7969f6ce, 0xb1b2b7d6, 0x0e488a32,
    0xfed67315, 0x262da2af, 0xdd7979f3, 0xbaab7ad0,
    0x6bd31528, 0x27b423f3, 0xda8850d6, 0xc2cdeb7f,
    0x8be4a16e, 0xe6e4bfca, 0x52a52fc4, 0x1ce7592a,
    0x0f8e3bab, 0xd79cc516, 0xa8fa73a9, 0x376b3d2e,
    0x49147c69, 0x15bedb85, 0x170d80a2, 0x442bf6ee,
    0x64335935, 0xedaa295f, 0xb8b23eff, 0x12d98869,
    0x594389e3, 0x2780465c, 0xc631eed9, 0x86bcd6ac,
    0x91424b98, 0xde15d780, 0xf8595bb2, 0xb6c13685,
    0x922a0f2d, 0xaa371f8a, 0x71091649, 0x2bc3ea89,
    0x84ced9c0, 0xa128315b, 0x4763599a, 0xa651f9f2,
    0xb4915de5, 0x7a9bfc13, 0xa62a4d7f, 0x1f3e8d1d,
    0x1d340033, 0x3b77fbea, 0x4551e40f, 0x43d72407,
    0x4da5622c, 0xddf2c95c, 0x1ff86d30, 0x5992e7ff,
    0xa8cdac69, 0xb550dbe9, 0x6b98331f, 0xd28759a2,
    0x0fd3aa1b, 0x288e1d33, 0x8e291c47, 0x1994f877,
    0x55d13c7a, 0x3996eff5, 0x696f85e1, 0xa3aec808,
    0x2f515ebf, 0x9451237c, 0xb7e19703, 0x253705e3,
    0x74ebe3e6, 0x1a73d20d, 0x667a0094, 0xeb7ae7a0,
    0x46593087, 0x6975f4c3, 0x2a521995, 0x45712985,
    0x68768d05, 0x83184c2e, 0xd924e560, 0xf4903324,
    0xac6d819e, 0x9797b991, 0x741091a3, 0xa2bc9491,
    0x35fb3c46, 0x1c097a9f, 0x580ae572, 0x90304320,
    0x92d5ee4a, 0xcc8b8144, 0x28c8bdb5, 0xd0be434a,
    0x0236eb01, 0x358231ea, 0x04564e95, 0x7d1582b7,
    0x652386d6, 0xaad0c96a, 0xcc47c214, 0xb4ae5ad6,
    0x816000ac, 0xafcdc2d6, 0xe5762abd, 0x2412cf0d,
    0xc3996f74, 0x208491af, 0xe4943617, 0x288a00bc,
    0x7b2b2ab2, 0xd1d1d40c, 0x81541524, 0x7de20f5c,
    0xbd3bba58, 0x846b3360, 0xa2ef0e03, 0x26c6bd14,
    0xddecf166, 0x3bc20046, 0x029549c3, 0xde02feb5,
    0xbb57d5bf, 0x7de2bcaf, 0x649e7b14, 0xd46973aa,
    0xb9959a24, 0x50f2f6cc, 0xcb454af9, 0x21512574,
    0xba0b56eb, 0xca1d8e80, 0x027bdfa6, 0x486b4f41,
    0x11ec8f80, 0x83853e4e, 0xadd16168, 0xbe781356,
    0x3e4326bf, 0x08099555, 0x6ec62884, 0xd109508f,
    0x98016d63, 0x0007a115, 0x708a1be7, 0x4d2aa19c,
    0x3a3c8f10, 0xd005851f, 0x746cfccc, 0x95542ff6,
    0x05f613c3, 0x364c1084, 0x3fc59fea, 0x0b2ba736,
    0x866642d0, 0x89b0dc0e, 0xd41bf7d6, 0xf6cd3666,
    0x503a12a6, 0x5fb5a9b1, 0xbafc62f0, 0xe2ed4d81,
    0x20f44dcf, 0x80f2d449, 0x9508b7f4, 0xfd38b7ef,
    0x936163ad, 0x5d8718c7, 0x6d6b5688, 0xf0f0fff5,
    0x0ecb2632, 0x2ba735b4, 0x6f2bb4bc, 0x2e3b3422,
    0x5f555fdd, 0x617e34ca, 0x5b03c019, 0x431ec2b9,
    0xf27c4cbd, 0x0691f848, 0x0a847404, 0x049276c6,
    0x0318ef83, 0xc3f89e17, 0xd778d74a, 0x7fafc1c2,
    0x756f8329, 0x2456d42c, 0x24b643e5, 0x75982580,
    0x542bbf94, 0x58fce178, 0x5ea3e131, 0x723fde13,
    0xb642a74d, 0xb7c5b518, 0x2db000cb, 0x9887b5ff,
    0xa9343e83, 0xf26d77d1, 0xce784ada, 0x234e402b,
];

/// Masking constants for the key-fixing pass of the key schedule.
pub static B: [u32; 4] = [0xa4a8d57b, 0x5b5d193b, 0xc8a8309b, 0x73f9a978];
