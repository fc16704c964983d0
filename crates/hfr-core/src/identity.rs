//! Measurement identity
//!
//! An identity is the digest of filename, fingerprint, and (under the
//! legacy scheme) a wall-clock reading, joined with `-`. The clock is the
//! single wall-clock dependency of the core and is injected so identity
//! generation stays deterministic under test.

use chrono::{DateTime, Utc};

use crate::config::IdentityScheme;
use hfr_common::digest::digest_bytes;
use hfr_common::types::DigestAlgorithm;

/// Injectable time source
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock reading system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Derive the measurement identity for a file.
///
/// `Timestamped` digests `{filename}-{unix_millis}-{fingerprint}`, so
/// re-ingesting identical bytes yields a fresh identity per clock reading.
/// `ContentAddressed` drops the clock component and is idempotent.
pub fn generate_id(
    filename: &str,
    fingerprint: &str,
    scheme: IdentityScheme,
    algorithm: DigestAlgorithm,
    clock: &dyn Clock,
) -> String {
    let id_string = match scheme {
        IdentityScheme::Timestamped => {
            format!("{}-{}-{}", filename, clock.now().timestamp_millis(), fingerprint)
        },
        IdentityScheme::ContentAddressed => format!("{}-{}", filename, fingerprint),
    };

    digest_bytes(id_string.as_bytes(), algorithm)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Clock pinned to a fixed instant
    pub(crate) struct FixedClock(pub DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    const FILENAME: &str = "TOTL_IBIZ_2023_05_01_0000.tuv";
    const FINGERPRINT: &str = "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";

    #[test]
    fn test_timestamped_id_matches_legacy_format() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap());
        let id = generate_id(
            FILENAME,
            FINGERPRINT,
            IdentityScheme::Timestamped,
            DigestAlgorithm::Sha256,
            &clock,
        );

        let expected_input =
            format!("{}-{}-{}", FILENAME, clock.0.timestamp_millis(), FINGERPRINT);
        assert_eq!(id, digest_bytes(expected_input.as_bytes(), DigestAlgorithm::Sha256));
        assert_eq!(id.len(), 64);
    }

    #[test]
    fn test_timestamped_ids_differ_across_clock_readings() {
        let first = FixedClock(Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap());
        let second = FixedClock(Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 1).unwrap());

        let a = generate_id(
            FILENAME,
            FINGERPRINT,
            IdentityScheme::Timestamped,
            DigestAlgorithm::Sha256,
            &first,
        );
        let b = generate_id(
            FILENAME,
            FINGERPRINT,
            IdentityScheme::Timestamped,
            DigestAlgorithm::Sha256,
            &second,
        );

        assert_ne!(a, b);
    }

    #[test]
    fn test_content_addressed_id_is_idempotent() {
        let first = FixedClock(Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap());
        let second = FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());

        let a = generate_id(
            FILENAME,
            FINGERPRINT,
            IdentityScheme::ContentAddressed,
            DigestAlgorithm::Sha256,
            &first,
        );
        let b = generate_id(
            FILENAME,
            FINGERPRINT,
            IdentityScheme::ContentAddressed,
            DigestAlgorithm::Sha256,
            &second,
        );

        assert_eq!(a, b);
    }

    #[test]
    fn test_different_filenames_yield_different_ids() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap());
        let a = generate_id(
            "TOTL_IBIZ_2023_05_01_0000.tuv",
            FINGERPRINT,
            IdentityScheme::ContentAddressed,
            DigestAlgorithm::Sha256,
            &clock,
        );
        let b = generate_id(
            "TOTL_IBIZ_2023_05_01_0100.tuv",
            FINGERPRINT,
            IdentityScheme::ContentAddressed,
            DigestAlgorithm::Sha256,
            &clock,
        );

        assert_ne!(a, b);
    }
}
