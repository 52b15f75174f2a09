//! Named curve parameter-set catalog.
//!
//! The 256-bit sets are the GOST R 34.10-2001 CryptoPro curves of
//! [RFC 4357], reused unchanged by the 256-bit mode of GOST R 34.10-2012;
//! the 512-bit sets are the TC26 curves of [RFC 7836]. The test set is the
//! curve the standard uses for its worked signature example and is kept
//! for known-answer tests.
//!
//! [RFC 4357]: https://datatracker.ietf.org/doc/html/rfc4357#section-11.4
//! [RFC 7836]: https://datatracker.ietf.org/doc/html/rfc7836#appendix-A

use crate::{Curve, Error, Mode, Result};
use core::fmt;
use core::str::FromStr;
use hex_literal::hex;
use num_bigint::{BigInt, Sign};

/// Named elliptic curve parameter sets for GOST R 34.10.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ParamSet {
    /// `id-GostR3410-2001-TestParamSet`: the 256-bit test curve from the
    /// standard's worked example. Not for production keys.
    Test2001,
    /// `id-GostR3410-2001-CryptoPro-A-ParamSet` (256-bit).
    CryptoProA,
    /// `id-GostR3410-2001-CryptoPro-B-ParamSet` (256-bit).
    CryptoProB,
    /// `id-GostR3410-2001-CryptoPro-C-ParamSet` (256-bit).
    CryptoProC,
    /// `id-tc26-gost-3410-12-512-paramSetA` (512-bit).
    Tc26Gost512A,
    /// `id-tc26-gost-3410-12-512-paramSetB` (512-bit).
    Tc26Gost512B,
}

impl ParamSet {
    /// Every parameter set in the catalog.
    pub const ALL: [ParamSet; 6] = [
        ParamSet::Test2001,
        ParamSet::CryptoProA,
        ParamSet::CryptoProB,
        ParamSet::CryptoProC,
        ParamSet::Tc26Gost512A,
        ParamSet::Tc26Gost512B,
    ];

    /// Looks a parameter set up by its standardized name.
    ///
    /// Unknown names yield [`Error::UnknownParamSet`].
    pub fn by_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|set| set.name() == name)
            .ok_or(Error::UnknownParamSet)
    }

    /// The standardized object-identifier name of this parameter set.
    pub const fn name(self) -> &'static str {
        match self {
            ParamSet::Test2001 => "id-GostR3410-2001-TestParamSet",
            ParamSet::CryptoProA => "id-GostR3410-2001-CryptoPro-A-ParamSet",
            ParamSet::CryptoProB => "id-GostR3410-2001-CryptoPro-B-ParamSet",
            ParamSet::CryptoProC => "id-GostR3410-2001-CryptoPro-C-ParamSet",
            ParamSet::Tc26Gost512A => "id-tc26-gost-3410-12-512-paramSetA",
            ParamSet::Tc26Gost512B => "id-tc26-gost-3410-12-512-paramSetB",
        }
    }

    /// Security level of keys and digests over this set's curve.
    pub const fn mode(self) -> Mode {
        match self {
            ParamSet::Test2001 | ParamSet::CryptoProA | ParamSet::CryptoProB
            | ParamSet::CryptoProC => Mode::Bits256,
            ParamSet::Tc26Gost512A | ParamSet::Tc26Gost512B => Mode::Bits512,
        }
    }

    /// Builds the curve instance for this parameter set.
    pub fn curve(self) -> Curve {
        match self {
            ParamSet::Test2001 => curve(
                &hex!("07"),
                &hex!("5FBFF498AA938CE739B8E022FBAFEF40563F6E6A3472FC2A514C0CE9DAE23B7E"),
                &hex!("8000000000000000000000000000000000000000000000000000000000000431"),
                &hex!("8000000000000000000000000000000150FE8A1892976154C59CFC193ACCF5B3"),
                &hex!("02"),
                &hex!("08E2A8A0E65147D4BD6316030E16D19C85C97F0A9CA267122B96ABBCEA7E8FC8"),
            ),
            ParamSet::CryptoProA => curve(
                &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD94"),
                &hex!("A6"),
                &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD97"),
                &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF6C611070995AD10045841B09B761B893"),
                &hex!("01"),
                &hex!("8D91E471E0989CDA27DF505A453F2B7635294F2DDF23E3B122ACC99C9E9F1E14"),
            ),
            ParamSet::CryptoProB => curve(
                &hex!("8000000000000000000000000000000000000000000000000000000000000C96"),
                &hex!("3E1AF419A269A5F866A7D3C25C3DF80AE979259373FF2B182F49D4CE7E1BBC8B"),
                &hex!("8000000000000000000000000000000000000000000000000000000000000C99"),
                &hex!("800000000000000000000000000000015F700CFFF1A624E5E497161BCC8A198F"),
                &hex!("01"),
                &hex!("3FA8124359F96680B83D1C3EB2C070E5C545C9858D03ECFB744BF8D717717EFC"),
            ),
            ParamSet::CryptoProC => curve(
                &hex!("9B9F605F5A858107AB1EC85E6B41C8AACF846E86789051D37998F7B9022D7598"),
                &hex!("805A"),
                &hex!("9B9F605F5A858107AB1EC85E6B41C8AACF846E86789051D37998F7B9022D759B"),
                &hex!("9B9F605F5A858107AB1EC85E6B41C8AA582CA3511EDDFB74F02F3A6598980BB9"),
                &hex!("00"),
                &hex!("41ECE55743711A8C3CBF3783CD08C0EE4D4DC440D4641A8F366E550DFDB3BB67"),
            ),
            ParamSet::Tc26Gost512A => curve(
                &hex!(
                    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
                    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFDC4"
                ),
                &hex!(
                    "E8C2505DEDFC86DDC1BD0B2B6667F1DA34B82574761CB0E879BD081CFD0B6265"
                    "EE3CB090F30D27614CB4574010DA90DD862EF9D4EBEE4761503190785A71C760"
                ),
                &hex!(
                    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
                    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFDC7"
                ),
                &hex!(
                    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"
                    "27E69532F48D89116FF22B8D4E0560609B4B38ABFAD2B85DCACDB1411F10B275"
                ),
                &hex!("03"),
                &hex!(
                    "7503CFE87A836AE3A61B8816E25450E6CE5E1C93ACF1ABC1778064FDCBEFA921"
                    "DF1626BE4FD036E93D75E6A50E3A41E98028FE5FC235F5B889A589CB5215F2A4"
                ),
            ),
            ParamSet::Tc26Gost512B => curve(
                &hex!(
                    "8000000000000000000000000000000000000000000000000000000000000000"
                    "000000000000000000000000000000000000000000000000000000000000006C"
                ),
                &hex!(
                    "687D1B459DC841457E3E06CF6F5E2517B97C7D614AF138BCBF85DC806C4B289F"
                    "3E965D2DB1416D217F8B276FAD1AB69C50F78BEE1FA3106EFB8CCBC7C5140116"
                ),
                &hex!(
                    "8000000000000000000000000000000000000000000000000000000000000000"
                    "000000000000000000000000000000000000000000000000000000000000006F"
                ),
                &hex!(
                    "8000000000000000000000000000000000000000000000000000000000000001"
                    "49A1EC142565A545ACFDB77BD9D40CFA8B996712101BEA0EC6346C54374F25BD"
                ),
                &hex!("02"),
                &hex!(
                    "1A8F7EDA389B094C2C071E3647A8940F3C123B697578C213BE6DD9E6C8EC7335"
                    "DCB228FD1EDF4A39152CBCAAF8C0398828041055F94CEEEC7E21340780FE41BD"
                ),
            ),
        }
    }
}

impl fmt::Display for ParamSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParamSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::by_name(s)
    }
}

fn curve(a: &[u8], b: &[u8], p: &[u8], q: &[u8], gx: &[u8], gy: &[u8]) -> Curve {
    Curve::new(int(a), int(b), int(p), int(q), int(gx), int(gy))
}

fn int(bytes: &[u8]) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, bytes)
}
