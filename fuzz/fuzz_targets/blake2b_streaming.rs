#![no_main]

use blake2::digest::{Update as _, VariableOutput as _};
use hashes::crypto::blake2b::{BYTES_MAX, BYTES_MIN, Blake2b, KEYBYTES_MAX, KEYBYTES_MIN};
use libfuzzer_sys::fuzz_target;

fn split_point(input: &[u8]) -> usize {
  if input.is_empty() {
    return 0;
  }
  (input[0] as usize) % (input.len() + 1)
}

fuzz_target!(|input: &[u8]| {
  let Some((&ctl, data)) = input.split_first() else {
    return;
  };
  let out_len = BYTES_MIN + (ctl as usize) % (BYTES_MAX - BYTES_MIN + 1);
  let split = split_point(data);
  let (a, b) = data.split_at(split);

  // Unkeyed: streaming equals one-shot equals the reference.
  {
    let ours = Blake2b::digest(out_len, &[], data).unwrap();
    let mut h = Blake2b::new(out_len, &[]).unwrap();
    h.update(a).unwrap();
    h.update(b).unwrap();
    assert_eq!(ours, h.finalize().unwrap());

    let mut r = blake2::Blake2bVar::new(out_len).unwrap();
    r.update(data);
    let mut expected = vec![0u8; out_len];
    r.finalize_variable(&mut expected).unwrap();
    assert_eq!(ours.as_bytes(), &expected[..]);
  }

  // Keyed: the key is the head of the input, the message the rest.
  let key_len = KEYBYTES_MIN + (ctl as usize) % (KEYBYTES_MAX - KEYBYTES_MIN + 1);
  if data.len() >= key_len {
    let (key, msg) = data.split_at(key_len);
    let split = split_point(msg);
    let (a, b) = msg.split_at(split);

    let ours = Blake2b::digest(out_len, key, msg).unwrap();
    let mut h = Blake2b::new(out_len, key).unwrap();
    h.update(a).unwrap();
    h.update(b).unwrap();
    assert_eq!(ours, h.finalize().unwrap());
    assert!(h.update(msg).is_err());
  }
});
