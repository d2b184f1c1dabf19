/*
[INPUT]:  DES3 key material, commands, wire-format bodies
[OUTPUT]: Encrypted RPC envelopes and decrypted plaintext
[POS]:    Codec layer - request/response encryption
[UPDATE]: When the wire format or cipher parameters change
*/

pub mod cipher;
pub mod envelope;

pub use envelope::EnvelopeCodec;
