use anchor_lang::error_code;

#[error_code]
pub enum GoalTrackerError {
    #[msg("A commitment already exists at this address")]
    AlreadyExists,

    #[msg("Owner cannot cover the stake plus the rent deposit")]
    InsufficientFunds,

    #[msg("No commitment exists at this address")]
    NotFound,

    #[msg("Only the commitment owner can resolve it")]
    Unauthorized,

    #[msg("Task deadline has passed")]
    DeadlinePassed,

    #[msg("Commitment account is not at its derived address")]
    InvalidAddress,

    ArithmeticOverflow,
}
