use solabi::{
    decode::{Decode, DecodeError, Decoder},
    encode::{encode, Encode, Encoder, Size},
};

use crate::constants::EVM_EXTRA_ARGS_V1_TAG;

/// Options blob understood by EVM destination chains.
///
/// A zero `gas_limit` means "use the lane default", so the default value is the
/// canonical empty options.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct EVMExtraArgsV1 {
    pub gas_limit: u128,
}

impl EVMExtraArgsV1 {
    /// Tag followed by the ABI-encoded struct, as `Client._argsToBytes` produces it.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = EVM_EXTRA_ARGS_V1_TAG.to_vec();
        bytes.extend_from_slice(&encode(self));
        bytes
    }
}

impl Encode for EVMExtraArgsV1 {
    fn size(&self) -> Size {
        (self.gas_limit,).size()
    }

    fn encode(&self, encoder: &mut Encoder) {
        (self.gas_limit,).encode(encoder);
    }
}

impl Decode for EVMExtraArgsV1 {
    fn is_dynamic() -> bool {
        <(u128,)>::is_dynamic()
    }

    fn decode(decoder: &mut Decoder) -> Result<Self, DecodeError> {
        let (gas_limit,) = Decode::decode(decoder)?;
        Ok(Self { gas_limit })
    }
}
