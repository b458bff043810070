use anchor_lang::prelude::*;

/// Drain an account's lamports to `destination` and zero its data so the
/// runtime reclaims it at the end of the transaction. Returns the rent
/// recovered.
pub fn close_entry_account<'info>(
    account: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
) -> Result<u64> {
    let lamports = account.lamports();

    **account.try_borrow_mut_lamports()? = 0;
    **destination.try_borrow_mut_lamports()? += lamports;

    let mut data = account.try_borrow_mut_data()?;
    data.fill(0);

    Ok(lamports)
}
