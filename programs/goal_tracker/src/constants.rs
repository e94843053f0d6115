pub const COMMITMENT_SEED: &[u8] = b"commitment";
