//! Hardcoded checkpoint tables
//!
//! What makes a good checkpoint block: its neighbours carry sane timestamps (nothing before
//! it is dated later, nothing after it earlier) and it contains no unusual transactions.

use crate::Calibration;

pub(crate) const MAINNET_CHECKPOINTS: &[(u64, &str)] = &[
    (0, "bbd01e417e370842498a91038fd40da95f4a6166a231a3bed3c4671207bd8296"),
    (25, "52424ba26dd18c2da10170054c8c39ec649d0ac2630585e53099ac70dc360721"),
    (125, "a13b9e454a00927f6b6fd59eda118d76b270f09f80ff848e7f3cb9a2f47837ed"),
    (1025, "a59d07caeca8b8601803a72729dabb846e4a2adda0022ea212e4911824ff85ae"),
    (5025, "dc5ea38e4b4f68e66ec4fe3c7b742f02388bca5d90f3c340675229f8ae23f8ca"),
    (10_025, "5fac2e11b6ab636534d0dc557f86f302b71647c9084eae6fe2ca389a37bb4e68"),
    (11_025, "b68d83930c52a880326fdda93fa6963e95133c1592cab5c8488b8aaebb4206b3"),
    (13_025, "5d5eb98932c5d81a1bac5fc653c2d95e648d089b2a607ca6ac15975bf05af009"),
    (15_025, "2c4305a5e070e1f470fa3289653db98bd7dd6eb847780d6d32e65d5b901b429f"),
    (20_025, "38d3027035e4725852203ee4a38768ce3fd12cc8d3d9ee1c00467d17d81c42be"),
    (25_025, "005df538003a40bc5f83c299397dce6a4d2a736ab4fdf46752a8fcec5a45cf7f"),
    (30_025, "0c3a6a48a8811b9c1683d86148b40384e0920a4020e0229bb7d3928e4c1e3168"),
    (35_000, "bc86cab2bf3c1dba06e511b7a0830dd1252b5b860cae1ae90c61c0ff117d191a"),
    (40_025, "afc48c6b0414bdc09ab31033ed4dd56d76c3fb29bc775060f2e393d58683625a"),
    (43_665, "a77dbe7205f122896e3f172a0fc7e99d662cf15cf4e92324cbf69a472160a1bd"),
    (43_869, "a55c9f9c892dc84fc97a670e79d79c3bec8f9dd9e32647fae8d8dcf13351f395"),
    (46_132, "cab3584e46e2b038475cee3fc151930a5254989973509463cd9ad5980525c59a"),
    (46_525, "80f62adfbb336b80c66a2eea963a705696f83787f375d72454511cef6db9ae77"),
    (47_025, "16d4d4462499ade6076ef2996913eb4b91eb6965e9d78b2553a83974ae42b57f"),
    (47_525, "a881a1f71726e1606211db240ea34f06343418a60739ce53195ddabee302b5de"),
    (48_025, "b63b43ed40ab1aaec59228dcc11259a8bc1407b20257fd1283d74bc60501a158"),
    (48_525, "e7754742b376b32a816038256f5277fa073527b6526887484ecbd8439b22eecf"),
    (49_025, "ef808fbbf7d5588394164b9f6c4190ae895134f1aa0d220f6379394e97ec07d7"),
    (50_025, "71c30991bff5baeefb2b6d976f9e54c72a25f164c14fe2239b5de248392f9d80"),
    (60_025, "9d7095a313497f158b65a7832e1434d06a52d76799b4d7c6db6a7f966b488013"),
    (65_025, "6fa8c8e1980d9929b09e0d8a2536c0fe67f230b02923060ab013d459c2c17184"),
    (65_525, "ebf93cdd64236622786e8b2b55079f70db658c6b27eccd92574271507789633e"),
    (85_525, "482eab083d59ff7846dbeedadd5bffbe31737a9ce703d39e35bb39a17982be25"),
    (95_525, "e66cb922df396e62026b2c2c812690ce962bd3ad2a1e70b6d2f8b60732a9978b"),
    (105_525, "2ac38e841ca3b8362aa3a7bbf3e757055518a450ce4712c73124be161a03ccc2"),
    (110_000, "e2d99af9501e8c2af2cce48516b925ac37c60b479530c72c7f9d198f7ee6fa07"),
    (120_000, "931dc828b580cbafe526c7db7e21fe807cba4fd7c0827e56dcf297267db13ba5"),
    (130_000, "4ec7cc6e98f87690f90969ff85e2fa133238cb4e80766c0b64796fce5317a902"),
    (140_000, "fcfd03560902a1b0ae6ba0de86a0992182600d57825b7a9e301fcca77e434c2c"),
    (267_269, "896b0ce91d5d7b3512871444a05f53d34c4c0e6c338b1c6de0e6c92aa10debb9"),
    (267_270, "595e91d2ab47f6313c48802a8befce80d83757c095350b1f3b0ce7127fe2b0f6"),
    (300_000, "d9941fe7230bb38099fb8bfab31bfa0d54b4806e4f1b4900a3403297e5bc4a1c"),
    (324_000, "0e57d704b97c43a97031161604412fd312e4b7de9650e8d85b5b9a4a041d8a80"),
];

pub(crate) const MAINNET_CALIBRATION: Calibration = Calibration {
    last_checkpoint_timestamp: 1_404_059_363,
    // Not measured yet. Until it is, every mainnet block counts as past the last checkpoint
    // when estimating progress
    last_checkpoint_tx_count: 0,
    estimated_tx_per_day: 100.0,
};

pub(crate) const TESTNET_CHECKPOINTS: &[(u64, &str)] = &[
    (546, "a0fea99a6897f531600c8ae53367b126824fd6a847b2b2b73817a95b8e27e602"),
];

pub(crate) const TESTNET_CALIBRATION: Calibration = Calibration {
    last_checkpoint_timestamp: 1_365_458_829,
    last_checkpoint_tx_count: 547,
    estimated_tx_per_day: 576.0,
};
