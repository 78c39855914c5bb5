//! Provides data and functions used to compute attacks
//!
//! Sliding and leaping attacks are answered from "fancy" magic-bitboard tables: per square,
//! the relevant occupancy bits are hashed by a multiply-shift into a dense table of
//! precomputed attack sets. The magic numbers were found offline by trial and error; the
//! build verifies that every collision they produce is constructive and panics otherwise.
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::convert::TryFrom;
use lazy_static::lazy_static;
use log::debug;
use super::*;

const fn m(high: u64, low: u64) -> u128 {
    ((high as u128) << 64) ^ low as u128
}

const ROOK_MAGIC_NUMBERS: [u128; Square::COUNT] = [
    m(0x4040_0004_1400_0A40, 0x8A08_C001_0C10_0400), m(0x0520_0048_0200_0020, 0x2000_0304_0801_0008),
    m(0x7040_0104_0006_5040, 0x0018_4000_0003_4001), m(0x4300_0088_0810_0040, 0x4008_4200_E404_0004),
    m(0x0400_2002_0040_0100, 0x4008_0001_0000_00A8), m(0x4040_0100_0120_0049, 0x0019_8088_0884_0100),
    m(0x0640_02A0_C000_410B, 0x0005_0000_0A20_0000), m(0x0200_0009_0004_0084, 0x0800_8100_0006_4000),
    m(0x0080_0104_0086_0A02, 0x0000_0880_0040_0121), m(0x5000_2000_085A_0000, 0x2048_3041_0020_01DA),
    m(0x028A_5000_1200_0060, 0x8010_0001_2010_1204), m(0x4000_4001_1000_2040, 0x8020_0022_A004_0210),
    m(0x0440_4001_0100_0080, 0x0900_0100_4008_0000), m(0x00BA_8000_8081_8008, 0x4200_5004_0100_0200),
    m(0x0000_8002_0008_4010, 0x0401_0008_0000_0080), m(0x1840_8000_9024_A104, 0x0008_0500_0400_0002),
    m(0x0100_4004_4090_0010, 0x8182_8000_0022_A200), m(0x0C10_8000_0120_0900, 0x4604_80A0_4220_0120),
    m(0x0020_6010_0004_C392, 0x8000_5840_C008_0300), m(0x8220_0084_0020_4000, 0x2000_1028_0000_8000),
    m(0x0A18_0024_0000_4000, 0x0800_9000_0200_4000), m(0x2008_2010_0030_2020, 0x0010_0000_10A5_0000),
    m(0x008C_0010_0024_0020, 0x0204_0000_1200_8000), m(0x0000_0200_0800_8010, 0x0440_1004_2620_0020),
    m(0x1080_0100_0410_8002, 0x1002_1000_0000_8000), m(0x6000_0080_0002_0214, 0x0914_0404_0301_5061),
    m(0x2008_0040_0004_8A18, 0x4042_0040_0801_0228), m(0xA830_1000_0800_0480, 0x5C30_4000_0000_0020),
    m(0x0008_0208_0C00_0180, 0x0010_0000_0000_C440), m(0x0291_6800_1000_2120, 0x8010_8009_2000_0040),
    m(0x2011_0200_0800_2040, 0x0002_400A_4002_0401), m(0x1000_0400_B000_4000, 0x0901_8010_0201_0000),
    m(0x0800_9001_0004_0008, 0x2020_0202_0001_0020), m(0x0000_6000_0800_0800, 0x0102_0000_4A02_0081),
    m(0x2002_0860_4000_1220, 0x1044_0484_2040_2100), m(0x2211_0080_2000_2101, 0x0900_0808_4000_8104),
    m(0x1101_2421_0804_0004, 0x4040_0000_0000_00A4), m(0x2400_0400_8422_0000, 0x4000_0400_8040_0000),
    m(0x0280_2000_8084_0040, 0x0020_0000_0004_1430), m(0x0018_0000_5008_0010, 0x4008_0800_2090_8008),
    m(0x000C_A100_0024_0004, 0x1000_4008_4018_6000), m(0x0880_1004_0080_0200, 0x0802_0800_A482_0106),
    m(0x0060_4004_8108_0021, 0x0400_1182_0010_1410), m(0x0000_0020_0420_0004, 0x0800_4400_4830_0881),
    m(0x2A10_0404_4030_0009, 0x0100_2005_0028_1502), m(0x0E02_A428_0015_0200, 0x1080_0000_0009_0A20),
    m(0x8088_0400_0400_4B00, 0x0420_0000_8212_8104), m(0x2008_2001_4200_0200, 0x0810_0040_0080_0C00),
    m(0x4201_2002_0004_2200, 0x0448_0042_0002_0402), m(0x0100_8003_01A0_1800, 0x1820_0802_0007_0042),
    m(0x018C_8000_8101_6800, 0x0122_1400_5010_0A01), m(0x0101_2000_4000_0200, 0x0200_0040_0184_1220),
    m(0x0000_A000_2000_0200, 0x0100_0010_0D10_4000), m(0x0040_4000_02C2_8400, 0x0040_4080_0840_0070),
    m(0x0000_2008_0000_8021, 0x0000_1008_4200_1000), m(0x8020_0031_0002_8004, 0x4000_9001_0000_0C0A),
    m(0x0008_0000_8000_4000, 0x4000_1000_4000_00C0), m(0x004A_0200_0800_8001, 0x0002_0200_0400_0A02),
    m(0x0200_8002_0040_1004, 0x0008_1000_2000_4001), m(0x0002_8002_0020_4004, 0x0004_0060_4400_0080),
    m(0x2103_2000_4000_0401, 0x0001_0004_0000_8440), m(0x0920_0810_A040_8408, 0x0002_2404_0006_1000),
    m(0x5100_0012_4AA0_0304, 0x0000_8020_0A18_0001), m(0x0122_0802_0800_4100, 0x0080_0040_9004_8080),
    m(0x0010_0800_0100_0301, 0x10C0_0200_8400_1001), m(0x0100_0400_8404_0084, 0x0200_0400_1080_0200),
    m(0x0010_400A_0005_00A0, 0x3500_022D_1008_5010), m(0x1006_8100_0014_0020, 0x0080_0104_0810_2004),
    m(0x6000_2000_4000_2000, 0x2280_0248_8300_4800), m(0x0220_4000_2004_1000, 0x8100_0200_0000_1000),
    m(0x0000_0600_4C41_0409, 0x0400_0580_0040_0040), m(0x0000_0110_0418_04A2, 0x2600_0100_0000_2884),
    m(0x8100_1A02_0410_0A02, 0x0121_0000_0000_6000), m(0x0004_0800_0C00_00A0, 0x6002_6003_1000_0000),
    m(0x0000_7800_2084_0010, 0x6000_4000_0044_0008), m(0x0230_8120_1200_1020, 0x2000_8000_8A10_0080),
    m(0x6822_0200_0010_2000, 0x0480_4000_4800_0100), m(0x100C_8000_4100_2000, 0x1001_0010_C400_0081),
    m(0x0000_4002_4001_2013, 0x0A04_8000_4000_2001), m(0x4808_0204_A002_2011, 0x0102_0000_0000_0800),
    m(0x0108_0008_1004_1000, 0x2021_0000_0088_0002), m(0x1001_8420_0200_2200, 0x0008_A040_0020_0202),
    m(0x0840_1000_0804_2060, 0x4002_0820_0004_0000), m(0x0430_C220_4041_0001, 0x0010_0020_0000_4B80),
    m(0x4410_0882_8100_0201, 0x8208_0020_0000_0208), m(0x4000_8000_3440_8080, 0x0428_0080_0020_04B0),
    m(0x0000_E000_1040_0004, 0x0400_0020_0004_8022), m(0x0000_4000_4000_0170, 0x0204_4140_0000_0408),
    m(0x0000_0045_0040_2202, 0x1043_0100_0004_8108), m(0x211A_2000_0128_0000, 0x8608_9020_0008_4008),
];

const BISHOP_MAGIC_NUMBERS: [u128; Square::COUNT] = [
    m(0x0037_6C00_0048_0001, 0x0880_0100_4120_0001), m(0x0017_E201_0000_0000, 0x0001_0000_0000_0000),
    m(0x0419_840C_0004_0020, 0x0000_4802_8820_4041), m(0x0013_1000_0010_0202, 0x4000_0004_0000_00A0),
    m(0x2109_9001_0032_0000, 0x2808_0020_02A0_0120), m(0x0203_2400_0206_8000, 0x0001_D101_0880_0100),
    m(0x0001_9640_9000_1018, 0x7002_0401_4800_1205), m(0x0225_F908_0020_1080, 0x0003_0412_0101_C208),
    m(0x0800_AF81_0203_0000, 0x0680_0000_0200_0388), m(0x0000_17B3_2889_4000, 0x2104_0282_0005_0000),
    m(0x2080_0F98_0408_0100, 0x1004_A800_1003_0002), m(0x0460_3322_0800_0040, 0x040C_0441_0001_200A),
    m(0x8000_492C_2000_3008, 0x0004_0040_4400_0800), m(0x1000_04C5_4000_0000, 0x0000_2042_0000_14C0),
    m(0x5102_4666_4240_1000, 0xA000_1000_2024_0264), m(0x0200_0129_8070_1000, 0x08C0_0040_0400_0020),
    m(0x0044_00BE_8000_4818, 0x8203_0080_0080_1404), m(0x4420_006B_C508_6000, 0x6010_0000_0020_2085),
    m(0x0021_4004_A900_0100, 0x1400_0040_0800_2E80), m(0x0010_6003_2520_0200, 0x0120_8020_0214_4002),
    m(0x9408_0C01_2000_0480, 0x2044_4122_0200_2000), m(0x6448_8001_1040_0100, 0x0000_0000_0010_6400),
    m(0x0001_0000_8A04_1200, 0x1110_1401_100C_1090), m(0x4280_9000_4100_0000, 0x6000_2410_0020_00C0),
    m(0x08C0_4881_2002_4214, 0x0008_4148_8020_2291), m(0x2080_B400_5054_4300, 0x0424_A040_0000_0002),
    m(0x8001_9300_1909_0445, 0x0400_6100_0C00_0104), m(0x0010_3040_126E_2283, 0x0000_0200_8420_C3B0),
    m(0x0200_0701_0036_8420, 0x0000_0402_0804_0002), m(0x0000_0308_0804_0800, 0x0A00_1280_0000_1000),
    m(0x0121_0281_0011_4080, 0x5010_2804_8110_0082), m(0x0121_0281_0011_4080, 0x5010_2804_8110_0082),
    m(0x0121_0281_0011_4080, 0x5010_2804_8110_0082), m(0x4024_0041_0102_8240, 0x0000_A200_0050_0060),
    m(0x4108_02C8_710C_8812, 0x1001_8100_0013_0814), m(0x4210_0025_C105_8000, 0x0020_4401_2000_0018),
    m(0x0418_008E_D800_0822, 0x4042_0400_8200_00F0), m(0x0000_0307_7830_0000, 0x2100_8014_0402_8000),
    m(0x0024_8009_9080_1240, 0x0004_0200_080C_0040), m(0x1080_010B_0C80_0008, 0x1800_4010_4060_2208),
    m(0xC202_408A_6460_000C, 0x0809_0311_0000_0800), m(0x0090_1910_C904_0000, 0x0000_0002_40A0_0001),
    m(0xC202_408A_6460_000C, 0x0809_0311_0000_0800), m(0x0100_2041_6EC2_0018, 0xC001_4000_4004_0410),
    m(0x0810_0000_3F20_0160, 0x6010_C010_4000_0008), m(0x0120_4090_00C0_81E7, 0x0000_8042_0000_1812),
    m(0x2002_0222_0000_00B7, 0xB011_0004_0020_1000), m(0x0008_0610_8411_2165, 0x8880_0400_0241_8026),
    m(0x0008_0610_8411_2165, 0x8880_0400_0241_8026), m(0x0100_6000_0088_2031, 0x8000_0042_0081_0001),
    m(0x0008_0610_8411_2165, 0x8880_0400_0241_8026), m(0x0006_0002_0500_0216, 0x6010_0044_0100_01A8),
    m(0x0000_0180_4000_080D, 0xD800_0840_0012_001C), m(0x2480_0008_0400_1007, 0xE810_8020_0010_00F0),
    m(0x440C_4000_0001_5800, 0xA9CC_0015_0A08_0410), m(0x440C_4000_0001_5800, 0xA9CC_0015_0A08_0410),
    m(0x1540_0088_0040_0400, 0x6200_0828_0002_0120), m(0x0800_0000_0030_0482, 0x9203_0081_0010_0013),
    m(0x0800_0000_0030_0482, 0x9203_0081_0010_0013), m(0x0800_0000_0030_0482, 0x9203_0081_0010_0013),
    m(0x0800_0000_0030_0482, 0x9203_0081_0010_0013), m(0x8410_0200_0110_2F08, 0x0422_0002_08C0_8000),
    m(0x0100_0000_1009_0058, 0x0388_0100_6100_0102), m(0x0010_0144_0101_010C, 0x0034_4448_0000_0000),
    m(0x1000_4800_2100_8050, 0x8829_4804_9010_0020), m(0x0800_7040_1080_4022, 0x4810_A000_0002_0000),
    m(0xC00A_8100_1400_0512, 0x0208_4024_1020_4220), m(0x2082_0009_0000_0108, 0x0024_5004_4400_1400),
    m(0x8040_0020_0040_9004, 0x8002_1100_1101_0809), m(0x000C_2000_0541_0002, 0x1004_4044_0448_0000),
    m(0x3020_0840_2012_0848, 0x0801_7828_4452_0000), m(0xB080_4201_0400_0502, 0x2901_3100_3880_3052),
    m(0x008A_4081_0808_0000, 0xF692_8120_4000_1287), m(0x0813_0008_0000_8008, 0x7D40_0004_8588_0010),
    m(0x0008_0200_3150_0100, 0xE588_D010_0004_4000), m(0x0010_0289_1004_2039, 0x3320_0180_0041_0404),
    m(0x0008_0200_3150_0100, 0xE588_D010_0004_4000), m(0x0010_0289_1004_2039, 0x3320_0180_0041_0404),
    m(0x2000_0004_0000_0000, 0x894C_0020_0424_0100), m(0x8100_4000_2120_0040, 0x157E_0002_0290_0082),
    m(0x4002_8212_A002_8210, 0x03F2_0008_1010_0800), m(0x0000_0100_0002_0010, 0x00EE_C000_0002_0220),
    m(0x8004_00A2_3C07_0820, 0x112F_B880_5002_1000), m(0x0108_0846_0404_0181, 0x4032_4020_0050_0400),
    m(0x0200_0004_0018_A404, 0x2126_4130_0020_0014), m(0x0000_0100_1800_0004, 0x400C_5820_1000_A800),
    m(0x0000_1022_0044_0200, 0x00C6_5940_000C_4000), m(0x9018_5110_2000_8110, 0x2103_1302_2018_0000),
    m(0x0224_2000_0020_1000, 0x2403_CE40_1301_3004), m(0x1000_0020_4804_0400, 0x0001_5F80_40A0_4004),
];

const KNIGHT_MAGIC_NUMBERS: [u128; Square::COUNT] = [
    m(0x61CE_0000_0001_0400, 0x4201_0089_0203_6000), m(0x1C22_5000_0010_0020, 0x0004_8000_0081_0008),
    m(0x1308_2008_8080_0080, 0x0010_4080_A009_2024), m(0x1308_2008_8080_0080, 0x0010_4080_A009_2024),
    m(0xA462_0061_0000_0008, 0x5014_0140_0000_00D2), m(0x8231_0080_1100_2000, 0x40CA_0820_C00A_8010),
    m(0x012A_8000_0808_0108, 0x1020_8100_0200_0202), m(0x0520_B302_0104_3000, 0x0000_0000_2128_1060),
    m(0x00B9_4584_2884_0314, 0x1000_1424_2088_1020), m(0x8814_2A80_1400_0005, 0x1808_0000_5004_0008),
    m(0x520B_1482_010A_0600, 0x00C1_1010_0080_0080), m(0x0009_8401_0000_0040, 0x8018_8094_0041_4400),
    m(0x0009_8401_0000_0040, 0x8018_8094_0041_4400), m(0x1202_0548_1000_0110, 0x8006_0010_001C_0000),
    m(0x0101_1288_6001_0001, 0x2400_3060_0000_2880), m(0xC800_8146_2044_2401, 0x2040_0084_0000_0004),
    m(0x0020_C247_0000_3021, 0x0100_0011_2012_410C), m(0x8000_492C_2000_3008, 0x0004_0040_4400_0800),
    m(0x4040_5B84_2104_0220, 0x0B10_0800_0000_A100), m(0xEA09_0884_30C0_0000, 0x2040_0286_0420_0040),
    m(0x0018_9410_A048_4020, 0x0005_8080_0200_0100), m(0x0034_5582_0012_0011, 0x8000_0808_D400_0C08),
    m(0x0002_24C3_0200_0001, 0x0000_0813_8400_2048), m(0x1881_2210_2000_0090, 0x2080_0602_2008_5018),
    m(0x0000_4620_4004_0000, 0x0020_4800_0000_10A0), m(0xA100_3042_6254_08C4, 0x0040_0000_0180_4200),
    m(0x08A0_15A4_1180_0421, 0x2068_08A0_00B5_8080), m(0x1220_2062_A400_0000, 0x1060_8410_1001_0000),
    m(0x0700_3029_1281_0200, 0x9000_0506_4108_0000), m(0x840A_8182_1102_0000, 0x4A12_0408_0006_0000),
    m(0x0820_0412_402A_0400, 0x2084_00A0_1000_0001), m(0x0640_1308_6480_0400, 0x0000_0480_2440_0010),
    m(0x000C_0102_2092_0198, 0x0000_0850_00A0_8000), m(0x0040_8510_2210_4100, 0x8002_0880_0802_0000),
    m(0x0004_0819_4009_0000, 0x0040_0800_0000_000A), m(0x4000_0010_2003_C404, 0x4001_2012_8080_0002),
    m(0x0039_9152_2211_4200, 0x2001_0200_88D0_0044), m(0x0810_0888_00A5_4100, 0x4C00_8000_0000_0000),
    m(0x0148_0020_C102_8000, 0x1041_4124_0004_8A00), m(0x0002_0019_0A24_1002, 0x1000_6004_0000_1881),
    m(0x0002_0019_0A24_1002, 0x1000_6004_0000_1881), m(0x0002_0000_1022_1020, 0x0000_2000_4000_0220),
    m(0x0000_0A00_6342_3444, 0x0041_002C_1581_1008), m(0x8408_022C_D122_0272, 0x0080_0000_0000_8802),
    m(0x4A00_0040_1016_9A10, 0x0100_0008_0004_0008), m(0x0000_0144_0249_4220, 0x1000_2848_8000_4200),
    m(0x6020_60C0_C101_3082, 0x4010_2041_0900_0200), m(0x8220_0000_0046_2041, 0x2200_0109_0021_0882),
    m(0x0002_1000_0112_4860, 0x0000_4820_6000_2000), m(0x2400_0000_0080_10C8, 0x0000_2400_0080_0080),
    m(0x0088_4000_1208_4408, 0x200C_0048_0900_0101), m(0x2000_0040_8422_442E, 0x2000_0002_0880_8000),
    m(0x0800_3000_0011_2A99, 0x0084_4001_0001_1A80), m(0x2100_0800_8108_0428, 0x9400_8000_0016_1402),
    m(0x8140_0440_8014_2052, 0x84C0_4020_2614_0104), m(0x1084_8121_8460_E780, 0x4500_0080_0009_1C98),
    m(0x0000_0004_0020_2040, 0x21A0_0493_280C_2008), m(0x4146_0100_E220_2013, 0x2010_1040_0001_4000),
    m(0x0080_2400_0002_1009, 0x1000_2B00_0041_3480), m(0x040C_8000_1000_2004, 0x1224_0404_A001_0080),
    m(0x4000_A018_0005_1004, 0x9240_0000_0200_8428), m(0x5280_0010_0020_0813, 0x1514_0002_0208_1248),
    m(0x4006_8400_0000_3114, 0x00B4_0000_2001_0000), m(0x0404_0801_000A_2486, 0x4196_8000_0804_0000),
    m(0x4001_0200_0080_4101, 0x2A13_1420_2800_0000), m(0x0880_0120_0000_0081, 0x4548_08C8_0002_0000),
    m(0x1210_0000_1040_0008, 0x9089_0408_5480_0880), m(0xC020_3100_0064_1048, 0x1108_1000_4001_0940),
    m(0x0201_8240_4200_4009, 0x0410_9089_0000_00C0), m(0x0600_0460_0000_0281, 0x0201_2460_2042_0400),
    m(0x04A0_0000_1830_2002, 0x0153_0801_1A00_1062), m(0x6100_0000_1100_0502, 0x0150_2248_0101_2048),
    m(0x0000_0100_0000_9000, 0x9D40_9000_004B_0800), m(0x2008_0001_0804_4000, 0x8819_C001_1000_0000),
    m(0x0800_0000_0504_3080, 0x1049_0000_4020_0000), m(0x0100_0002_0120_0300, 0x1108_8C28_3040_C000),
    m(0xC000_0A04_1040_0090, 0x0844_8500_0080_1001), m(0x0E28_5003_0488_0000, 0x042A_4400_1240_0200),
    m(0x0E28_5003_0488_0000, 0x042A_4400_1240_0200), m(0x2002_0000_1008_2220, 0x05D2_0900_8400_8001),
    m(0x5000_0004_2000_4020, 0x02B3_0440_0002_0900), m(0x1100_000A_0800_3808, 0x2056_A218_0000_8065),
    m(0x0500_5200_1800_2900, 0x02A8_5542_2102_4000), m(0x0200_0000_4098_1008, 0x0010_6240_8040_0880),
    m(0x4C21_1000_0050_3845, 0x4850_5620_0100_20A8), m(0x0000_0801_2800_0212, 0x0318_9308_0020_1481),
    m(0x2480_0404_A001_4000, 0x0902_5106_0000_0022), m(0x0000_4000_1000_4021, 0x9402_16C8_0400_2002),
    m(0x0000_11A6_0101_0400, 0x200B_1CA1_0000_0002), m(0x0020_1080_0100_0020, 0x851A_8661_4000_0000),
];

const KNIGHT_TO_MAGIC_NUMBERS: [u128; Square::COUNT] = [
    m(0x0037_6C00_0048_0001, 0x0880_0100_4120_0001), m(0x0031_8000_0041_9802, 0x1045_0044_8422_0000),
    m(0x0419_840C_0004_0020, 0x0000_4802_8820_4041), m(0x0013_1000_0010_0202, 0x4000_0004_0000_00A0),
    m(0x2109_9001_0032_0000, 0x2808_0020_02A0_0120), m(0x0203_2400_0206_8000, 0x0001_D101_0880_0100),
    m(0x0001_9640_9000_1018, 0x7002_0401_4800_1205), m(0x0540_CC00_4000_0001, 0x0208_902A_0288_6205),
    m(0x0800_AF81_0203_0000, 0x0680_0000_0200_0388), m(0x2C00_1070_4411_7186, 0x0472_2080_0002_4020),
    m(0xB000_1964_4010_4004, 0x5000_0010_8030_0028), m(0x1090_4208_1000_0060, 0x8800_0430_1000_4000),
    m(0x0840_0102_0048_0040, 0x0801_0200_0260_8000), m(0x0410_0088_C080_2000, 0x0382_0041_0829_2000),
    m(0x0A11_1242_0240_0C01, 0x0006_9480_0410_0020), m(0x0101_1288_6001_0001, 0x2400_3060_0000_2880),
    m(0x5102_4666_4240_1000, 0xA000_1000_2024_0264), m(0x00A1_0852_8005_0288, 0x4000_2810_D000_0004),
    m(0x0021_4004_A900_0100, 0x1400_0040_0800_2E80), m(0x0009_0004_2000_8840, 0x4881_3000_0000_0210),
    m(0x9408_0C01_2000_0480, 0x2044_4122_0200_2000), m(0x6448_8001_1040_0100, 0x0000_0000_0010_6400),
    m(0x0001_0000_8A04_1200, 0x1110_1401_100C_1090), m(0x4280_9000_4100_0000, 0x6000_2410_0020_00C0),
    m(0x08C0_4881_2002_4214, 0x0008_4148_8020_2291), m(0x0400_4200_0810_0290, 0x1002_0413_6814_0101),
    m(0x8001_9300_1909_0445, 0x0400_6100_0C00_0104), m(0x0010_3040_126E_2283, 0x0000_0200_8420_C3B0),
    m(0x0948_1160_1A01_4100, 0x0800_2000_2050_4000), m(0x2081_0221_0104_0000, 0x0020_3082_D808_0080),
    m(0x0001_C220_8042_2008, 0x0020_0004_0000_0215), m(0x2002_810C_0120_0004, 0xC020_800D_0080_0000),
    m(0x0121_0281_0011_4080, 0x5010_2804_8110_0082), m(0x2410_2044_4808_4080, 0x0004_00A8_01B0_4AC0),
    m(0x9242_0020_0004_9000, 0x1108_3084_0040_A100), m(0x0480_1050_5009_C000, 0xA001_0000_1203_4000),
    m(0x82A4_001B_1C41_2000, 0x3011_0082_060A_2002), m(0xC008_8002_0439_1000, 0x0C40_0004_9000_0320),
    m(0x4802_000D_14C1_8021, 0x0000_0800_0786_0100), m(0x0090_0004_4010_2220, 0x9304_0000_0420_0180),
    m(0x2040_0123_8100_1282, 0x0480_4080_104A_4000), m(0x8804_0081_42E9_0810, 0x0602_02A0_8140_0000),
    m(0x4000_0052_8800_8460, 0x400A_0C40_4000_0000), m(0x0801_0218_0910_0408, 0x1600_0460_0028_4400),
    m(0x9000_0040_2640_0608, 0xC800_0004_2224_8286), m(0x0000_0800_0242_012D, 0x1240_0802_4200_0548),
    m(0x0040_0060_0221_0044, 0x0600_0080_0040_8000), m(0x0040_0060_0221_0044, 0x0600_0080_0040_8000),
    m(0x0000_2000_0840_8189, 0x0002_0000_2200_0020), m(0x0000_2000_0840_8189, 0x0002_0000_2200_0020),
    m(0x1208_0100_4012_2808, 0x4080_4244_8200_0080), m(0x0C00_2900_1890_2002, 0x4204_1000_0000_0000),
    m(0x2002_0000_8008_2001, 0x1154_0050_0001_3100), m(0x0506_82C1_2512_5402, 0x6018_4100_0230_8020),
    m(0x440C_4000_0001_5800, 0xA9CC_0015_0A08_0410), m(0x0000_4404_0004_4C00, 0x2000_0800_4010_0500),
    m(0x0000_4404_0004_4C00, 0x2000_0800_4010_0500), m(0x0070_0002_2150_4231, 0x8804_5014_0100_0108),
    m(0x8028_0004_0000_2000, 0x24C2_0000_0100_0000), m(0x0802_0080_0400_9005, 0x0242_0310_0800_1000),
    m(0x0800_0000_0030_0482, 0x9203_0081_0010_0013), m(0x2002_0018_8800_2442, 0x0084_8200_1000_0000),
    m(0x0A00_5400_0414_04C8, 0x0684_0002_0231_0040), m(0x0010_0144_0101_010C, 0x0034_4448_0000_0000),
    m(0x0000_0300_0002_0041, 0x0021_1000_002C_0800), m(0x0800_7040_1080_4022, 0x4810_A000_0002_0000),
    m(0xC00A_8100_1400_0512, 0x0208_4024_1020_4220), m(0x2082_0009_0000_0108, 0x0024_5004_4400_1400),
    m(0x8040_0020_0040_9004, 0x8002_1100_1101_0809), m(0x000C_2000_0541_0002, 0x1004_4044_0448_0000),
    m(0x0268_5024_0010_0021, 0x080A_2018_4080_2080), m(0xB080_4201_0400_0502, 0x2901_3100_3880_3052),
    m(0x0080_8000_0000_0000, 0x6602_A440_0181_1000), m(0xA000_0408_5400_000A, 0x4180_4A02_0060_C540),
    m(0x0085_2620_805C_000A, 0xC40A_6820_0401_4006), m(0x0000_8402_0400_0026, 0x0800_0448_0109_0460),
    m(0x0000_8402_0400_0026, 0x0800_0448_0109_0460), m(0x0008_4001_4000_0018, 0x0220_8910_0481_0800),
    m(0x0008_4001_4000_0018, 0x0220_8910_0481_0800), m(0x0000_1802_0200_1008, 0x0263_4102_0004_0040),
    m(0x0008_0440_0100_0000, 0x0176_00A2_0800_8084), m(0x0000_0100_0002_0010, 0x00EE_C000_0002_0220),
    m(0x0182_4000_0008_1100, 0x0061_8011_2400_0088), m(0x0108_0846_0404_0181, 0x4032_4020_0050_0400),
    m(0x0200_0004_0018_A404, 0x2126_4130_0020_0014), m(0x0000_0100_1800_0004, 0x400C_5820_1000_A800),
    m(0x0000_1022_0044_0200, 0x00C6_5940_000C_4000), m(0x9018_5110_2000_8110, 0x2103_1302_2018_0000),
    m(0x0000_1022_0044_0200, 0x00C6_5940_000C_4000), m(0x1000_0020_4804_0400, 0x0001_5F80_40A0_4004),
];

const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(2, 2), (-2, 2), (2, -2), (-2, -2)];
const KNIGHT_DIRECTIONS: [(i32, i32); 8] =
    [(-2, -1), (-2, 1), (2, -1), (2, 1), (1, -2), (1, 2), (-1, -2), (-1, 2)];

// Attack-table sizes, the sum over all squares of one slot per relevant occupancy subset.
const ROOK_TABLE_SIZE: usize = 0x108000;
const BISHOP_TABLE_SIZE: usize = 0x228;
const KNIGHT_TABLE_SIZE: usize = 0x380;
const KNIGHT_TO_TABLE_SIZE: usize = 0x3E0;

/// The square reached by stepping `(dr, df)` ranks and files from `sq`, if it is on the board
fn destination(sq: Square, (dr, df): (i32, i32)) -> Option<Square> {
    let r = sq.rank() as i32 + dr;
    let f = sq.file() as i32 + df;
    if (0..Rank::COUNT as i32).contains(&r) && (0..File::COUNT as i32).contains(&f) {
        let file = File::try_from(f as usize).expect("INFALLIBLE");
        let rank = Rank::try_from(r as usize).expect("INFALLIBLE");
        Some(Square::from_coord(file, rank))
    } else {
        None
    }
}

/// Computes rook or cannon attacks from `sq` by walking the four orthogonal rays
///
/// A rook attacks up to and including the first occupied square. A cannon attacks only the
/// squares behind its first hurdle, up to and including the second occupied square.
fn sliding_attack(cannon: bool, sq: Square, occupied: BitBoard) -> BitBoard {
    let mut attack = BitBoard::new();

    for &d in &[(1, 0), (-1, 0), (0, -1), (0, 1)] {
        let mut hurdle = false;
        let mut from = sq;
        while let Some(s) = destination(from, d) {
            if !cannon || hurdle {
                attack.insert(s);
            }
            if occupied.contains(s) {
                if cannon && !hurdle {
                    hurdle = true;
                } else {
                    break;
                }
            }
            from = s;
        }
    }

    attack
}

/// Computes the leg square blocking the leap `d` from `s`, as a bitboard
///
/// For `knight_to`, the jump is reversed: the leg is the one a knight on the *destination*
/// would need clear to reach `s`.
fn leaper_path(knight_to: bool, d: (i32, i32), s: Square) -> BitBoard {
    let to = match destination(s, d) {
        Some(to) => to,
        None => return BitBoard::new(),
    };

    let (s, to, d) = if knight_to { (to, s, (-d.0, -d.1)) } else { (s, to, d) };

    let dr = if d.0 > 0 { 1 } else { -1 };
    let df = if d.1 > 0 { 1 } else { -1 };

    let diff = (to.file() as i32 - s.file() as i32).abs() - (to.rank() as i32 - s.rank() as i32).abs();
    let step = if diff > 0 {
        (0, df)
    } else if diff < 0 {
        (dr, 0)
    } else {
        (dr, df)
    };

    let leg = destination(s, step).expect("INFALLIBLE");
    BitBoard::from(leg)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Leaper {
    Bishop,
    Knight,
    KnightTo,
}

impl Leaper {
    fn directions(self) -> &'static [(i32, i32)] {
        match self {
            Leaper::Bishop => &BISHOP_DIRECTIONS,
            _ => &KNIGHT_DIRECTIONS,
        }
    }
}

/// The union of all leg squares for the piece's leaps from `s`
fn leaper_paths(pt: Leaper, s: Square) -> BitBoard {
    let mut b = BitBoard::new();
    for &d in pt.directions() {
        b |= leaper_path(pt == Leaper::KnightTo, d, s);
    }
    if pt == Leaper::Bishop {
        b &= HALF[(s.rank() as usize > 4) as usize];
    }
    b
}

/// The leap destinations from `s` whose legs are not blocked by `occupied`
fn leaper_attack(pt: Leaper, s: Square, occupied: BitBoard) -> BitBoard {
    let mut b = BitBoard::new();
    for &d in pt.directions() {
        if let Some(to) = destination(s, d) {
            if leaper_path(pt == Leaper::KnightTo, d, s).is_disjoint(occupied) {
                b.insert(to);
            }
        }
    }
    if pt == Leaper::Bishop {
        b &= HALF[(s.rank() as usize > 4) as usize];
    }
    b
}

/// Squares attacked by a pawn of the side to move standing on `s`
fn pawn_attacks_bb(s: Square) -> BitBoard {
    let mut attack = BitBoard::new();
    if let Some(to) = destination(s, (1, 0)) {
        attack.insert(to);
    }
    // Sideways movement only after crossing the river
    if s.rank() as usize > 4 {
        for &d in &[(0, -1), (0, 1)] {
            if let Some(to) = destination(s, d) {
                attack.insert(to);
            }
        }
    }
    attack
}

/// Squares from which a pawn could attack `s`
///
/// `ours` selects whose side `s` belongs to; the attacking pawns are the other side's.
fn pawn_attacks_to_bb(ours: bool, s: Square) -> BitBoard {
    let mut attack = BitBoard::new();
    let forward = if ours { (1, 0) } else { (-1, 0) };
    if let Some(to) = destination(s, forward) {
        attack.insert(to);
    }
    if (ours && (s.rank() as usize) < 5) || (!ours && s.rank() as usize > 4) {
        for &d in &[(0, -1), (0, 1)] {
            if let Some(to) = destination(s, d) {
                attack.insert(to);
            }
        }
    }
    attack
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Per-square magic lookup parameters
#[derive(Debug, Copy, Clone)]
struct Magic {
    /// Relevant occupancy mask
    mask: u128,
    /// Magic multiplier
    magic: u128,
    /// `128 - mask.count_ones()`, so the product's top bits become the index
    shift: u32,
    /// Start of this square's slots in the shared attacks table
    offset: usize,
}

impl Magic {
    fn index(&self, occupied: BitBoard) -> usize {
        self.offset + (((occupied.0 & self.mask).wrapping_mul(self.magic)) >> self.shift) as usize
    }
}

/// One piece category's complete attack table
#[derive(Debug)]
struct MagicTable {
    magics: Vec<Magic>,
    attacks: Vec<BitBoard>,
}

impl MagicTable {
    fn probe(&self, sq: Square, occupied: BitBoard) -> BitBoard {
        self.attacks[self.magics[sq as usize].index(occupied)]
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum TablePiece {
    Rook,
    Cannon,
    Bishop,
    Knight,
    KnightTo,
}

impl TablePiece {
    fn magic_numbers(self) -> &'static [u128; Square::COUNT] {
        match self {
            // The cannon moves along rook rays, so it shares the rook's masks and magics
            TablePiece::Rook | TablePiece::Cannon => &ROOK_MAGIC_NUMBERS,
            TablePiece::Bishop => &BISHOP_MAGIC_NUMBERS,
            TablePiece::Knight => &KNIGHT_MAGIC_NUMBERS,
            TablePiece::KnightTo => &KNIGHT_TO_MAGIC_NUMBERS,
        }
    }

    fn relevant_mask(self, sq: Square) -> BitBoard {
        let mask = match self {
            TablePiece::Rook | TablePiece::Cannon => sliding_attack(false, sq, BitBoard::new()),
            TablePiece::Bishop => leaper_paths(Leaper::Bishop, sq),
            TablePiece::Knight => leaper_paths(Leaper::Knight, sq),
            TablePiece::KnightTo => return leaper_paths(Leaper::KnightTo, sq),
        };

        // Board edges never change which inner squares block a ray
        let edges = ((BitBoard::from(Rank::R0) | Rank::R9.into()) - sq.rank().into())
            | ((BitBoard::from(File::A) | File::I.into()) - sq.file().into());
        mask - edges
    }

    fn attack(self, sq: Square, occupied: BitBoard) -> BitBoard {
        match self {
            TablePiece::Rook => sliding_attack(false, sq, occupied),
            TablePiece::Cannon => sliding_attack(true, sq, occupied),
            TablePiece::Bishop => leaper_attack(Leaper::Bishop, sq, occupied),
            TablePiece::Knight => leaper_attack(Leaper::Knight, sq, occupied),
            TablePiece::KnightTo => leaper_attack(Leaper::KnightTo, sq, occupied),
        }
    }

    /// Builds the category's table, one square at a time, enumerating every subset of the
    /// relevant occupancy mask with the Carry-Rippler trick
    ///
    /// # Panics
    /// Panics if a magic number produces a destructive collision, which would mean the
    /// constant tables are corrupt.
    fn build(self, table_size: usize) -> MagicTable {
        let magic_numbers = self.magic_numbers();
        let mut magics = Vec::with_capacity(Square::COUNT);
        let mut attacks = vec![BitBoard::new(); table_size];
        let mut offset = 0;

        for i in 0..Square::COUNT {
            let sq = Square::try_from(i).expect("INFALLIBLE");
            let mask = self.relevant_mask(sq);
            let m = Magic {
                mask: mask.0,
                magic: magic_numbers[i],
                shift: 128 - mask.len() as u32,
                offset,
            };

            let mut occupied = BitBoard::new();
            loop {
                let index = m.index(occupied);
                let attack = self.attack(sq, occupied);
                if attacks[index] != BitBoard::new() && attacks[index] != attack {
                    panic!("invalid magic number for {:?} on {}", self, sq);
                }
                attacks[index] = attack;

                occupied = BitBoard(occupied.0.wrapping_sub(m.mask) & m.mask);
                if occupied.is_empty() {
                    break;
                }
            }

            offset += 1 << mask.len();
            magics.push(m);
        }

        assert_eq!(offset, table_size, "attack table size mismatch for {:?}", self);
        MagicTable { magics, attacks }
    }
}

/// All process-wide attack tables
#[derive(Debug)]
struct Tables {
    rook: MagicTable,
    cannon: MagicTable,
    bishop: MagicTable,
    knight: MagicTable,
    knight_to: MagicTable,
    king: [BitBoard; Square::COUNT],
    advisor: [BitBoard; Square::COUNT],
    pawn: [BitBoard; Square::COUNT],
    pawn_to_ours: [BitBoard; Square::COUNT],
    pawn_to_theirs: [BitBoard; Square::COUNT],
}

impl Tables {
    fn build() -> Tables {
        let rook = TablePiece::Rook.build(ROOK_TABLE_SIZE);
        let cannon = TablePiece::Cannon.build(ROOK_TABLE_SIZE);
        let bishop = TablePiece::Bishop.build(BISHOP_TABLE_SIZE);
        let knight = TablePiece::Knight.build(KNIGHT_TABLE_SIZE);
        let knight_to = TablePiece::KnightTo.build(KNIGHT_TO_TABLE_SIZE);

        let mut king = [BitBoard::new(); Square::COUNT];
        let mut advisor = [BitBoard::new(); Square::COUNT];
        let mut pawn = [BitBoard::new(); Square::COUNT];
        let mut pawn_to_ours = [BitBoard::new(); Square::COUNT];
        let mut pawn_to_theirs = [BitBoard::new(); Square::COUNT];

        for i in 0..Square::COUNT {
            let sq = Square::try_from(i).expect("INFALLIBLE");
            pawn[i] = pawn_attacks_bb(sq);
            pawn_to_ours[i] = pawn_attacks_to_bb(true, sq);
            pawn_to_theirs[i] = pawn_attacks_to_bb(false, sq);

            // Kings and advisors only ever stand inside a palace
            if PALACE.contains(sq) {
                for &d in &[(1, 0), (-1, 0), (0, -1), (0, 1)] {
                    if let Some(to) = destination(sq, d) {
                        king[i].insert(to);
                    }
                }
                king[i] &= PALACE;

                for &d in &[(1, -1), (1, 1), (-1, -1), (-1, 1)] {
                    if let Some(to) = destination(sq, d) {
                        advisor[i].insert(to);
                    }
                }
                advisor[i] &= PALACE;
            }
        }

        debug!(
            "attack tables built: {} sliding + {} leaping entries",
            2 * ROOK_TABLE_SIZE,
            BISHOP_TABLE_SIZE + KNIGHT_TABLE_SIZE + KNIGHT_TO_TABLE_SIZE,
        );

        Tables {
            rook,
            cannon,
            bishop,
            knight,
            knight_to,
            king,
            advisor,
            pawn,
            pawn_to_ours,
            pawn_to_theirs,
        }
    }
}

lazy_static! {
    static ref TABLES: Tables = Tables::build();
}

/// Forces construction of the attack tables
///
/// The tables are built on first use in any case; calling this up front moves the one-time
/// cost to a predictable point. Calling it again is a no-op.
///
/// # Panics
/// Panics if a magic number produces a destructive collision, which would mean the constant
/// tables are corrupt.
pub fn init() {
    lazy_static::initialize(&TABLES);
}

/// Computes rook attacks from `sq` given the occupied squares `occ`
///
/// The attack set extends along each orthogonal ray up to and including the first occupied
/// square.
#[inline]
pub fn rook_attacks(sq: Square, occ: BitBoard) -> BitBoard {
    TABLES.rook.probe(sq, occ)
}

/// Computes cannon capture attacks from `sq` given the occupied squares `occ`
///
/// Only squares behind exactly one hurdle are attacked. Quiet cannon moves are rook
/// attacks minus the occupied squares.
#[inline]
pub fn cannon_attacks(sq: Square, occ: BitBoard) -> BitBoard {
    TABLES.cannon.probe(sq, occ)
}

/// Computes bishop attacks from `sq` given the occupied squares `occ`
///
/// Blocked jumps are excluded, and the set never crosses the river.
#[inline]
pub fn bishop_attacks(sq: Square, occ: BitBoard) -> BitBoard {
    TABLES.bishop.probe(sq, occ)
}

/// Computes knight attacks from `sq` given the occupied squares `occ`, excluding leaps
/// whose leg square is occupied
#[inline]
pub fn knight_attacks(sq: Square, occ: BitBoard) -> BitBoard {
    TABLES.knight.probe(sq, occ)
}

/// Computes the squares a knight could attack `sq` from, given the occupied squares `occ`
///
/// This is not the same set as [`knight_attacks`](fn.knight_attacks.html) because the leg
/// square of the reversed jump differs.
#[inline]
pub fn knight_attacks_to(sq: Square, occ: BitBoard) -> BitBoard {
    TABLES.knight_to.probe(sq, occ)
}

/// Computes king attacks from `sq`, confined to the palace
///
/// Empty if `sq` is outside both palaces.
#[inline]
pub fn king_attacks(sq: Square) -> BitBoard {
    TABLES.king[sq as usize]
}

/// Computes advisor attacks from `sq`, confined to the palace
///
/// Empty if `sq` is outside both palaces.
#[inline]
pub fn advisor_attacks(sq: Square) -> BitBoard {
    TABLES.advisor[sq as usize]
}

/// Computes the squares attacked by a pawn of the side to move on `sq`
#[inline]
pub fn pawn_attacks(sq: Square) -> BitBoard {
    TABLES.pawn[sq as usize]
}

/// Computes the squares from which a pawn could attack `sq`
///
/// `ours` selects whose side `sq` belongs to, so the attacking pawns are the other
/// side's: with `ours` true they advance toward rank 0.
#[inline]
pub fn pawn_attacks_to(sq: Square, ours: bool) -> BitBoard {
    if ours {
        TABLES.pawn_to_ours[sq as usize]
    } else {
        TABLES.pawn_to_theirs[sq as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_attacks_stop_at_blockers() {
        let occ = BitBoard::from(Square::E2) | Square::C0.into();
        let attacks = rook_attacks(Square::E0, occ);
        assert!(attacks.contains(Square::E1));
        assert!(attacks.contains(Square::E2));
        assert!(!attacks.contains(Square::E3));
        assert!(attacks.contains(Square::D0));
        assert!(attacks.contains(Square::C0));
        assert!(!attacks.contains(Square::B0));
        assert!(attacks.contains(Square::F0));
        assert!(attacks.contains(Square::I0));
    }

    #[test]
    fn cannon_attacks_need_exactly_one_hurdle() {
        // hurdle on e2, target on e5
        let occ = BitBoard::from(Square::E2) | Square::E5.into();
        let attacks = cannon_attacks(Square::E0, occ);
        assert!(attacks.contains(Square::E3));
        assert!(attacks.contains(Square::E4));
        assert!(attacks.contains(Square::E5));
        assert!(!attacks.contains(Square::E6));
        assert!(!attacks.contains(Square::E1));
        assert!(!attacks.contains(Square::E2));

        // no hurdle, no attacks along that ray
        assert!(cannon_attacks(Square::E0, BitBoard::new()).is_empty());
    }

    #[test]
    fn knight_leaps_are_blocked_by_the_leg() {
        let attacks = knight_attacks(Square::E4, BitBoard::new());
        assert_eq!(attacks.len(), 8);
        assert!(attacks.contains(Square::D6));
        assert!(attacks.contains(Square::F6));
        assert!(attacks.contains(Square::G5));

        // leg on e5 blocks both forward leaps
        let attacks = knight_attacks(Square::E4, Square::E5.into());
        assert!(!attacks.contains(Square::D6));
        assert!(!attacks.contains(Square::F6));
        assert!(attacks.contains(Square::G5));
    }

    #[test]
    fn knight_attacks_to_reverses_the_leg() {
        // a knight on d6 attacks e4 past the leg on d5
        let to = knight_attacks_to(Square::E4, BitBoard::new());
        assert!(to.contains(Square::D6));
        let to = knight_attacks_to(Square::E4, Square::D5.into());
        assert!(!to.contains(Square::D6));
        assert!(to.contains(Square::F6));
    }

    #[test]
    fn bishops_stay_on_their_side_of_the_river() {
        let attacks = bishop_attacks(Square::C4, BitBoard::new());
        assert_eq!(attacks, BitBoard::from(Square::A2) | Square::E2.into());

        // blocked by a piece on the intermediate square
        let attacks = bishop_attacks(Square::C4, Square::B3.into());
        assert_eq!(attacks, BitBoard::from(Square::E2));
    }

    #[test]
    fn kings_and_advisors_stay_in_the_palace() {
        assert_eq!(
            king_attacks(Square::E1),
            BitBoard::from(Square::E0) | Square::D1.into() | Square::F1.into() | Square::E2.into()
        );
        assert_eq!(king_attacks(Square::D0), BitBoard::from(Square::E0) | Square::D1.into());
        assert!(king_attacks(Square::A0).is_empty());

        assert_eq!(
            advisor_attacks(Square::E1),
            BitBoard::from(Square::D0) | Square::F0.into() | Square::D2.into() | Square::F2.into()
        );
        assert_eq!(advisor_attacks(Square::D0), BitBoard::from(Square::E1));
    }

    #[test]
    fn pawns_move_sideways_only_past_the_river() {
        assert_eq!(pawn_attacks(Square::E3), BitBoard::from(Square::E4));
        assert_eq!(
            pawn_attacks(Square::E5),
            BitBoard::from(Square::E6) | Square::D5.into() | Square::F5.into()
        );
        // a pawn on the last rank can only move sideways
        assert_eq!(
            pawn_attacks(Square::E9),
            BitBoard::from(Square::D9) | Square::F9.into()
        );
    }

    #[test]
    fn pawn_attacks_to_match_pawn_attacks() {
        for i in 0..Square::COUNT {
            let from = Square::try_from(i).unwrap();
            // the attacker is a pawn of the side to move, so the target is theirs
            for to in pawn_attacks(from) {
                assert!(pawn_attacks_to(to, false).contains(from));
            }
        }
    }
}
