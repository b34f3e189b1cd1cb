use anchor_lang::prelude::Pubkey;

pub const ANCHOR_DISCRIMINATOR: usize = 8;

pub const CONTROLLER_SEED: &[u8] = b"controller";
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed of the router PDA that exists only for enabled destination chains
pub const DEST_CHAIN_STATE_SEED: &[u8] = b"dest_chain_state";
/// Seed of the router PDA that pulls tokens as the vault's delegate
pub const FEE_BILLING_SIGNER_SEED: &[u8] = b"fee_billing_signer";
/// Seed of the router PDA that collects fees paid in lamports
pub const NATIVE_FEE_RECEIVER_SEED: &[u8] = b"native_fee_receiver";

/// `bytes4(keccak256("CCIP EVMExtraArgsV1"))`
pub const EVM_EXTRA_ARGS_V1_TAG: [u8; 4] = [0x97, 0xa6, 0x57, 0xc9];

/// Sentinel fee token meaning the fee is paid in lamports
pub const NATIVE_FEE_TOKEN: Pubkey = Pubkey::new_from_array([0u8; 32]);

pub const EVM_ADDRESS_LENGTH: usize = 20;
pub const ZERO_EVM_ADDRESS: [u8; EVM_ADDRESS_LENGTH] = [0u8; EVM_ADDRESS_LENGTH];
