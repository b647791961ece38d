use alloy_primitives::Address;

use crate::{
    error::{Result, SetProtocolError},
    wrappers::core::CoreWrapper,
};

/// The Set must have been created through Core
pub async fn is_valid_set(core: &CoreWrapper, set: Address) -> Result<()> {
    if !core.valid_sets(set).await? {
        return Err(SetProtocolError::Validation(format!("Contract at {} is not a valid Set token address.", set)));
    }
    Ok(())
}
