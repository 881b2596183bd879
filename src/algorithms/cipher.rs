//! Raw Gaussian RSA: modular exponentiation of a single block in Z[i].

use crate::errors::{Error, Result};
use crate::gaussian::GaussianInt;
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// ⚠️ Raw Gaussian RSA encryption of `m` with the public key: `m^e mod N`.
///
/// `m` must already be reduced modulo `N`, i.e. `m mod N == m`; otherwise the
/// decrypted block would be a different representative and
/// [`Error::MessageTooLong`] is returned instead.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// No padding is performed. See the [module-level documentation][crate::hazmat]
/// for more information.
#[inline]
pub fn gaussian_encrypt<K: PublicKeyParts>(key: &K, m: &GaussianInt) -> Result<GaussianInt> {
    if !is_reduced(m, key.n())? {
        return Err(Error::MessageTooLong);
    }

    m.mod_pow(key.e(), key.n())
}

/// ⚠️ Raw Gaussian RSA decryption of `c` with the private key: `c^d mod N`.
///
/// Any representative of the class of `c` modulo `N` decrypts to the same
/// block.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// No padding is removed. See the [module-level documentation][crate::hazmat]
/// for more information.
#[inline]
pub fn gaussian_decrypt<K: PrivateKeyParts>(key: &K, c: &GaussianInt) -> Result<GaussianInt> {
    c.mod_pow(key.d(), key.n())
}

/// Whether `value` is the canonical representative of its class modulo `modulus`.
fn is_reduced(value: &GaussianInt, modulus: &GaussianInt) -> Result<bool> {
    Ok(&value.checked_rem(modulus)? == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    struct RawKey {
        n: GaussianInt,
        e: BigUint,
        d: BigUint,
    }

    impl PublicKeyParts for RawKey {
        fn n(&self) -> &GaussianInt {
            &self.n
        }

        fn e(&self) -> &BigUint {
            &self.e
        }
    }

    impl PrivateKeyParts for RawKey {
        fn d(&self) -> &BigUint {
            &self.d
        }
    }

    fn key() -> RawKey {
        // (65519 + 0i)(48411 + 44174i)
        RawKey {
            n: GaussianInt::new(3171840309u64, 2894236306u64),
            e: BigUint::from(65537u32),
            d: BigUint::from(9247704469172472833u64),
        }
    }

    #[test]
    fn test_known_vector() {
        let key = key();
        let m = GaussianInt::new(123, 45);

        let c = gaussian_encrypt(&key, &m).unwrap();
        assert_eq!(c, GaussianInt::new(1158490363, -189101622));
        assert_eq!(gaussian_decrypt(&key, &c).unwrap(), m);
    }

    #[test]
    fn test_zero_and_one_are_fixed_points() {
        let key = key();
        for m in [GaussianInt::new(0, 0), GaussianInt::new(1, 0)] {
            assert_eq!(gaussian_encrypt(&key, &m).unwrap(), m);
        }
    }

    #[test]
    fn test_unreduced_blocks() {
        let key = key();
        let m = &key.n + &GaussianInt::new(123, 45);

        assert_eq!(gaussian_encrypt(&key, &m), Err(Error::MessageTooLong));
    }

    #[test]
    fn test_decrypt_any_representative() {
        let key = key();
        let m = GaussianInt::new(123, 45);
        let c = gaussian_encrypt(&key, &m).unwrap();

        let i_n = &GaussianInt::i() * &key.n;
        let shifted = [
            &c + &key.n,
            &c - &key.n,
            &c + &i_n,
            &c - &(&key.n * &GaussianInt::new(7, -3)),
        ];
        for shifted in shifted {
            assert_eq!(gaussian_decrypt(&key, &shifted).unwrap(), m, "c = {}", shifted);
        }
    }
}
