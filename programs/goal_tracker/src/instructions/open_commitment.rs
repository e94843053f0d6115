use anchor_lang::prelude::*;

use crate::{
    constants::COMMITMENT_SEED,
    error::GoalTrackerError,
    events::CommitmentOpened,
    state::Commitment,
    utils::{create_commitment_account, FundingPlan},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct OpenCommitmentArgs {
    pub commitment_id: u64,
    /// Unix timestamp; not required to be in the future
    pub deadline: i64,
    /// Lamports to lock in custody
    pub staked_amount: u64,
}

pub fn open_commitment(ctx: Context<OpenCommitment>, args: OpenCommitmentArgs) -> Result<()> {
    let owner = ctx.accounts.owner.to_account_info();
    let commitment_info = ctx.accounts.commitment.to_account_info();

    // === Uniqueness ===
    require!(
        commitment_info.data_is_empty() && commitment_info.owner == &System::id(),
        GoalTrackerError::AlreadyExists
    );

    // === Funding ===
    let rent = Rent::get()?;
    let plan = FundingPlan::new(
        commitment_info.lamports(),
        rent.minimum_balance(Commitment::SPACE),
        args.staked_amount,
        owner.lamports(),
        rent.minimum_balance(0),
    )?;

    let owner_key = owner.key();
    let id_bytes = args.commitment_id.to_le_bytes();
    let bump = [ctx.bumps.commitment];
    let signer_seeds: &[&[u8]] = &[COMMITMENT_SEED, owner_key.as_ref(), &id_bytes, &bump];

    create_commitment_account(
        &owner,
        &commitment_info,
        &ctx.accounts.system_program.to_account_info(),
        &plan,
        Commitment::SPACE,
        signer_seeds,
    )?;

    // === Record ===
    let commitment = Commitment {
        owner: owner_key,
        commitment_id: args.commitment_id,
        deadline: args.deadline,
        staked_amount: args.staked_amount,
        completed: false,
        bump: ctx.bumps.commitment,
    };
    {
        let mut data = commitment_info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        commitment.try_serialize(&mut writer)?;
    }

    msg!("Commitment opened: {}", commitment_info.key());
    msg!(
        "Owner: {}, id: {}, deadline: {}, stake: {}",
        owner_key,
        args.commitment_id,
        args.deadline,
        args.staked_amount
    );

    CommitmentOpened::emit_event(
        commitment_info.key(),
        owner_key,
        args.commitment_id,
        args.deadline,
        args.staked_amount,
        plan.deposit,
    )?;

    Ok(())
}

#[derive(Accounts)]
#[instruction(args: OpenCommitmentArgs)]
pub struct OpenCommitment<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The commitment PDA, created by the handler once it is known to be vacant
    #[account(
        mut,
        seeds = [COMMITMENT_SEED, owner.key().as_ref(), args.commitment_id.to_le_bytes().as_ref()],
        bump
    )]
    /// CHECK: Must be empty and system-owned; checked in the handler.
    pub commitment: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
