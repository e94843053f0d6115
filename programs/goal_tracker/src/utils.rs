use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};

use crate::{error::GoalTrackerError, ID};

/// Lamports an owner must move to open a commitment at a given address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundingPlan {
    /// Part of the rent-exempt minimum not already sitting on the address
    pub deposit: u64,
    /// `deposit + staked_amount`
    pub total: u64,
    /// Lamports sent to the address beyond the rent-exempt minimum; handed to
    /// the owner once the account is adopted so custody equals the stake
    pub surplus: u64,
    /// The address already holds lamports, so it is topped up and adopted
    /// instead of created
    pub pre_funded: bool,
}

impl FundingPlan {
    /// `owner_rent_floor` is the rent-exempt minimum of the owner's own
    /// account: after paying `total` the owner must be left empty or at or
    /// above it
    pub fn new(
        existing_lamports: u64,
        rent_minimum: u64,
        staked_amount: u64,
        owner_balance: u64,
        owner_rent_floor: u64,
    ) -> Result<Self> {
        let deposit = rent_minimum.saturating_sub(existing_lamports);
        let total = deposit
            .checked_add(staked_amount)
            .ok_or(GoalTrackerError::ArithmeticOverflow)?;

        let remaining = owner_balance
            .checked_sub(total)
            .ok_or(GoalTrackerError::InsufficientFunds)?;
        require!(
            remaining == 0 || remaining >= owner_rent_floor,
            GoalTrackerError::InsufficientFunds
        );

        Ok(Self {
            deposit,
            total,
            surplus: existing_lamports.saturating_sub(rent_minimum),
            pre_funded: existing_lamports > 0,
        })
    }
}

/// Create the commitment PDA, funded with deposit and stake, owned by this program
pub fn create_commitment_account<'info>(
    owner: &AccountInfo<'info>,
    commitment: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    plan: &FundingPlan,
    space: usize,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    let signer = &[signer_seeds];

    if !plan.pre_funded {
        return create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: owner.clone(),
                    to: commitment.clone(),
                },
                signer,
            ),
            plan.total,
            space as u64,
            &ID,
        );
    }

    // Someone already sent lamports here; a plain create_account would fail
    if plan.total > 0 {
        transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: owner.clone(),
                    to: commitment.clone(),
                },
            ),
            plan.total,
        )?;
    }
    allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: commitment.clone(),
            },
            signer,
        ),
        space as u64,
    )?;
    assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            Assign {
                account_to_assign: commitment.clone(),
            },
            signer,
        ),
        &ID,
    )?;

    // The program owns the account now, so the surplus can leave directly
    if plan.surplus > 0 {
        move_lamports(commitment, owner, plan.surplus)?;
    }
    Ok(())
}

/// Move `amount` lamports from a program-owned `source` to `destination`
pub fn move_lamports(source: &AccountInfo, destination: &AccountInfo, amount: u64) -> Result<()> {
    let debited = source
        .lamports()
        .checked_sub(amount)
        .ok_or(GoalTrackerError::ArithmeticOverflow)?;
    let credited = destination
        .lamports()
        .checked_add(amount)
        .ok_or(GoalTrackerError::ArithmeticOverflow)?;

    **source.try_borrow_mut_lamports()? = debited;
    **destination.try_borrow_mut_lamports()? = credited;
    Ok(())
}

/// Move every lamport from `source` to `destination`, returning the amount moved
pub fn sweep_lamports(source: &AccountInfo, destination: &AccountInfo) -> Result<u64> {
    let released = source.lamports();
    move_lamports(source, destination, released)?;
    Ok(released)
}

/// Return all lamports to `destination` and hand the emptied account back to
/// the system program
pub fn close_commitment_account<'info>(
    commitment: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
) -> Result<u64> {
    let released = sweep_lamports(commitment, destination)?;

    commitment.try_borrow_mut_data()?.fill(0);
    commitment.assign(&System::id());
    commitment.realloc(0, false)?;

    Ok(released)
}
