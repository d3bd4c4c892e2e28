//! Integration tests for osu-api-core
//!
//! These tests verify that multiple modules work together correctly.
//! Network-facing behavior is tested against exchange stubs; nothing here
//! touches the real service.

use osu_api_core::beatmap::{
    adjusted_approach_rate, adjusted_bpm, adjusted_health_drain, adjusted_overall_difficulty,
    adjusted_total_length, approach_rate_to_ms, ms_to_approach_rate,
};
use osu_api_core::{Beatmap, Credentials, Mod, Mods, RankedStatus, TokenCache};

/// Test the mods codec end to end
mod mods_tests {
    use super::*;

    #[test]
    fn test_wire_bit_values() {
        let expected: [(Mod, u64); 23] = [
            (Mod::NoFail, 1),
            (Mod::Easy, 2),
            (Mod::NoVideo, 4),
            (Mod::Hidden, 8),
            (Mod::HardRock, 16),
            (Mod::SuddenDeath, 32),
            (Mod::DoubleTime, 64),
            (Mod::Relax, 128),
            (Mod::HalfTime, 256),
            (Mod::Nightcore, 512),
            (Mod::Flashlight, 1024),
            (Mod::Autoplay, 2048),
            (Mod::SpunOut, 4096),
            (Mod::Relax2, 8192),
            (Mod::Perfect, 16384),
            (Mod::Key4, 32768),
            (Mod::Key5, 65536),
            (Mod::Key6, 131072),
            (Mod::Key7, 262144),
            (Mod::Key8, 524288),
            (Mod::FadeIn, 1048576),
            (Mod::Random, 2097152),
            (Mod::LastMod, 4194304),
        ];
        for (m, bit) in expected {
            assert_eq!(m.bit(), bit, "{:?}", m);
        }
    }

    #[test]
    fn test_parseable_short_codes() {
        for (code, m) in [
            ("NF", Mod::NoFail),
            ("EZ", Mod::Easy),
            ("HD", Mod::Hidden),
            ("HR", Mod::HardRock),
            ("SD", Mod::SuddenDeath),
            ("DT", Mod::DoubleTime),
            ("HT", Mod::HalfTime),
            ("NC", Mod::Nightcore),
            ("FL", Mod::Flashlight),
            ("SO", Mod::SpunOut),
            ("PF", Mod::Perfect),
        ] {
            assert_eq!(Mod::from_short_code(code), Some(m));
            assert_eq!(m.short_code(), Some(code));
        }
    }

    #[test]
    fn test_continuous_parse_round_trip() {
        let mods = Mods::from_short_codes("EZHDFL").unwrap();
        assert_eq!(Mods::to_short_codes(mods.iter()), "EZHDFL");
    }

    #[test]
    fn test_continuous_parse_rejects_garbage() {
        assert_eq!(Mods::from_short_codes("HDXX"), None);
        assert_eq!(Mods::from_short_codes("HD DT"), None);
        // failure is distinct from "no mods"
        assert_ne!(Mods::from_short_codes(""), None);
    }

    #[test]
    fn test_canonicalize_matches_nightcore_fix() {
        assert_eq!(
            Mods::from(Mod::Nightcore).canonicalize(),
            Mods::from(Mod::DoubleTime)
        );
        assert_eq!(
            [Mod::Nightcore, Mod::Hidden]
                .into_iter()
                .collect::<Mods>()
                .canonicalize(),
            [Mod::DoubleTime, Mod::Hidden].into_iter().collect::<Mods>()
        );
    }
}

/// Test the documented difficulty scenarios
mod difficulty_tests {
    use super::*;

    #[test]
    fn test_window_inverse_pair() {
        for ar in [0.0, 3.3, 5.0, 7.0, 10.0] {
            let ms = approach_rate_to_ms(ar);
            assert!((ms_to_approach_rate(ms) - ar).abs() < 1e-12);
        }
        assert_eq!(approach_rate_to_ms(5.0), 1200.0);
    }

    #[test]
    fn test_double_time_hard_rock_scenarios() {
        let mods: Mods = [Mod::DoubleTime, Mod::HardRock].into_iter().collect();
        assert_eq!(adjusted_approach_rate(10.0, mods), 11.0);

        let od = adjusted_overall_difficulty(7.0, mods);
        assert!((od - 10.9722222222222).abs() < 1e-10);
    }

    #[test]
    fn test_double_time_length_truncation() {
        assert_eq!(adjusted_total_length(258, Mods::from(Mod::DoubleTime)), 172);
    }

    #[test]
    fn test_parsed_mods_drive_adjustment() {
        // free-form input straight into the transform
        let mods = Mods::from_short_codes("HRNC").unwrap();
        assert_eq!(adjusted_bpm(100.0, mods), 150.0);
        assert_eq!(adjusted_health_drain(5.0, mods), 7.0);
    }
}

/// Test the beatmap model against a real v1 payload shape
mod beatmap_tests {
    use super::*;

    #[test]
    fn test_decode_and_adjust() {
        let json = r#"[{
            "beatmap_id": "75",
            "beatmapset_id": "1",
            "artist": "Kenji Ninuma",
            "title": "DISCO PRINCE",
            "version": "Normal",
            "creator": "peppy",
            "source": "",
            "approved": "1",
            "approved_date": "2007-10-06 17:46:31",
            "last_update": "2007-10-06 17:46:31",
            "bpm": "119.999",
            "difficultyrating": "2.2918",
            "diff_overall": "6",
            "diff_size": "4",
            "diff_approach": "6",
            "diff_drain": "6",
            "hit_length": "108",
            "total_length": "141",
            "mode": "0"
        }]"#;

        let maps: Vec<Beatmap> = serde_json::from_str(json).unwrap();
        let map = &maps[0];
        assert_eq!(map.id, 75);
        assert_eq!(map.approved, RankedStatus::Ranked);

        let dt = Mods::from(Mod::DoubleTime);
        assert_eq!(map.bpm_with(dt), 119.999 * 1.5);
        assert_eq!(map.total_length_with(dt), 94);
        // drain is untouched by time scaling
        assert_eq!(map.health_drain_with(dt), 6.0);
    }
}

/// Test the token cache against stubbed exchanges
mod token_tests {
    use std::future::Future;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use osu_api_core::{
        ConstantStore, Error, FileStore, MemoryStore, Result, TokenExchange, TokenGrant,
    };
    use tempfile::TempDir;

    use super::*;

    struct CountingExchange {
        calls: Arc<AtomicU32>,
        lifetime: i64,
    }

    impl TokenExchange for CountingExchange {
        fn exchange(
            &self,
            _credentials: &Credentials,
        ) -> impl Future<Output = Result<TokenGrant>> + Send {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            let lifetime = self.lifetime;
            async move {
                Ok(TokenGrant {
                    access_token: format!("T{}", n),
                    expires_in: lifetime,
                })
            }
        }
    }

    fn counting(lifetime: i64) -> (CountingExchange, Arc<AtomicU32>) {
        let calls = Arc::new(AtomicU32::new(0));
        (
            CountingExchange {
                calls: Arc::clone(&calls),
                lifetime,
            },
            calls,
        )
    }

    fn credentials() -> Credentials {
        Credentials::new("12345", "0123456789012345678901234567890123456789").unwrap()
    }

    #[tokio::test]
    async fn test_token_is_fetched_once_and_reused() {
        let (exchange, calls) = counting(60);
        let cache = TokenCache::with_exchange(credentials(), MemoryStore::default(), exchange);

        assert_eq!(cache.get_token().await.unwrap(), "T1");
        assert_eq!(cache.get_token().await.unwrap(), "T1");
        assert_eq!(cache.get_token().await.unwrap(), "T1");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_short_lived_token_is_refreshed() {
        // within the 10 second renewal margin from the start
        let (exchange, calls) = counting(5);
        let cache = TokenCache::with_exchange(credentials(), MemoryStore::default(), exchange);

        assert_eq!(cache.get_token().await.unwrap(), "T1");
        assert_eq!(cache.get_token().await.unwrap(), "T2");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_file_cache_survives_reconstruction() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token.json");

        let (exchange, calls) = counting(60);
        let cache = TokenCache::with_exchange(credentials(), FileStore::new(&path), exchange);
        assert_eq!(cache.get_token().await.unwrap(), "T1");
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // fresh instance, same file: the persisted token is still valid,
        // so no exchange happens
        let (exchange, calls) = counting(60);
        let reopened = TokenCache::with_exchange(credentials(), FileStore::new(&path), exchange);
        assert_eq!(reopened.get_token().await.unwrap(), "T1");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_constant_cache_never_exchanges() {
        let (exchange, calls) = counting(60);
        let cache = TokenCache::with_exchange(credentials(), ConstantStore::new("fake"), exchange);

        assert_eq!(cache.get_token().await.unwrap(), "fake");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_credential_validation() {
        assert!(Credentials::new("12345", "0123456789012345678901234567890123456789").is_ok());
        assert!(matches!(
            Credentials::new("not-a-number", "0123456789012345678901234567890123456789"),
            Err(Error::InvalidClientId(_))
        ));
        assert!(matches!(
            Credentials::new("12345", "too-short"),
            Err(Error::InvalidClientSecret)
        ));
    }
}
