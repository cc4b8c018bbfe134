use rand::Rng;
use uuid::Uuid;

/// Produces ids for new notes.
///
/// Ids must be unique with overwhelming probability for the lifetime of
/// the process; they become the persisted primary key and are immutable
/// after creation.
pub trait IdGenerator {
    fn new_id(&self) -> String;
}

/// Default generator: cryptographically strong v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

const FALLBACK_PREFIX: &str = "id-";
const FALLBACK_LEN: usize = 9;
const FALLBACK_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Fallback generator for environments without a secure random source.
///
/// Produces `id-` plus nine pseudo-random base-36 characters. The prefix
/// keeps the format disjoint from UUIDs. This is NOT cryptographically
/// strong; callers must not treat these ids as unguessable.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackIdGenerator;

impl IdGenerator for FallbackIdGenerator {
    fn new_id(&self) -> String {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..FALLBACK_LEN)
            .map(|_| FALLBACK_CHARSET[rng.gen_range(0..FALLBACK_CHARSET.len())] as char)
            .collect();
        format!("{}{}", FALLBACK_PREFIX, suffix)
    }
}
