#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &[u8]| {
  // Binary round trip.
  let encoded = ct::hex::encode(input);
  assert_eq!(ct::hex::decode(&encoded, ""), Ok(input.to_vec()));

  // Arbitrary text never panics, and strict decoding agrees with the prefix
  // decoder whenever it succeeds.
  if let Ok(text) = core::str::from_utf8(input) {
    let mut out = vec![0u8; text.len() / 2 + 1];
    let prefix = ct::hex::decode_prefix(text, ": ", &mut out);
    if let Ok(bytes) = ct::hex::decode(text, ": ") {
      let prefix = prefix.unwrap();
      assert_eq!(prefix.consumed, text.len());
      assert_eq!(&out[..prefix.written], &bytes[..]);
    }
  }
});
