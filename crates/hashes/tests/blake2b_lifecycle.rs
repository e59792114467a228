use std::io::{IoSlice, Write as _};

use hashes::{
  Error, StreamingHash,
  crypto::blake2b::{
    BYTES, BYTES_MAX, BYTES_MIN, Blake2b, Blake2bParams, KEYBYTES, KEYBYTES_MAX, KEYBYTES_MIN, PERSONALBYTES,
    SALTBYTES, generate_key,
  },
};

const EMPTY_512: &str = "786a02f742015903c6c6fd852552d272912f4740e15847618a86e217f71f5419\
                         d25e1031afee585313896444934eb04b903a685b1448b755d56f701afe9be2ce";

#[test]
fn finalize_right_after_construction_hashes_the_empty_message() {
  let mut h = Blake2b::new(64, &[]).unwrap();
  assert_eq!(h.finalize().unwrap().to_string(), EMPTY_512);
}

#[test]
fn finalized_engine_rejects_everything() {
  let mut h = Blake2b::new(BYTES, &[]).unwrap();
  h.update(b"data").unwrap();
  h.finalize().unwrap();

  assert!(h.is_finalized());
  assert_eq!(h.update(b"more"), Err(Error::InvalidState));
  assert_eq!(h.update(&[]), Err(Error::InvalidState));
  assert_eq!(h.finalize().unwrap_err(), Error::InvalidState);
  let mut out = [0u8; BYTES];
  assert_eq!(h.finalize_into(&mut out), Err(Error::InvalidState));
  assert_eq!(h.update_vectored(&[&b"a"[..], &b"b"[..]]), Err(Error::InvalidState));
  assert!(h.verify(&[0u8; BYTES]).is_err());
}

#[test]
fn reset_is_never_offered() {
  let key = [1u8; KEYBYTES];
  let mut h = Blake2b::new(BYTES, &key).unwrap();
  assert_eq!(h.reset(), Err(Error::UnsupportedOperation));
  assert_eq!(StreamingHash::reset(&mut h), Err(Error::UnsupportedOperation));

  // The failed reset left the engine as it was.
  h.update(b"abc").unwrap();
  assert_eq!(h.finalize().unwrap(), Blake2b::digest(BYTES, &key, b"abc").unwrap());
  assert_eq!(h.reset(), Err(Error::UnsupportedOperation));
}

#[test]
fn output_length_is_range_checked() {
  for len in [0, BYTES_MIN - 1, BYTES_MAX + 1, usize::MAX] {
    assert_eq!(
      Blake2b::new(len, &[]).unwrap_err(),
      Error::SizeOutOfRange {
        what: "output length",
        len,
        min: BYTES_MIN,
        max: BYTES_MAX
      }
    );
  }
  for len in BYTES_MIN..=BYTES_MAX {
    let mut h = Blake2b::new(len, &[]).unwrap();
    assert_eq!(h.output_len(), len);
    assert_eq!(h.finalize().unwrap().len(), len);
  }
}

#[test]
fn key_length_is_range_checked() {
  let key = [0u8; KEYBYTES_MAX + 1];
  for len in [1, KEYBYTES_MIN - 1, KEYBYTES_MAX + 1] {
    assert_eq!(
      Blake2b::new(BYTES, &key[..len]).unwrap_err(),
      Error::SizeOutOfRange {
        what: "key",
        len,
        min: KEYBYTES_MIN,
        max: KEYBYTES_MAX
      }
    );
  }
  assert!(Blake2b::new(BYTES, &key[..KEYBYTES_MIN]).is_ok());
  assert!(Blake2b::new(BYTES, &key[..KEYBYTES_MAX]).is_ok());
}

#[test]
fn salt_and_personalization_are_paired_and_exact() {
  let salt = [0x11u8; SALTBYTES];
  let personal = [0x22u8; PERSONALBYTES];

  assert_eq!(
    Blake2b::with_params(&Blake2bParams::new().salt(&salt)).unwrap_err(),
    Error::MissingRequiredParameter { what: "personalization" }
  );
  assert_eq!(
    Blake2b::with_params(&Blake2bParams::new().personal(&personal)).unwrap_err(),
    Error::MissingRequiredParameter { what: "salt" }
  );
  assert_eq!(
    Blake2b::new_salt_personal(BYTES, &[], &salt[..15], &personal).unwrap_err(),
    Error::wrong_width("salt", 15, SALTBYTES)
  );
  assert!(Blake2b::new_salt_personal(BYTES, &[], &salt, &personal).is_ok());
}

#[test]
fn every_parameter_changes_the_digest() {
  let key_a = [0xaau8; KEYBYTES];
  let mut key_b = key_a;
  key_b[KEYBYTES - 1] ^= 1;
  let salt = [0x11u8; SALTBYTES];
  let personal = [0x22u8; PERSONALBYTES];
  let mut other_personal = personal;
  other_personal[0] ^= 0x80;
  let msg = b"the same message";

  let unkeyed = Blake2b::digest(BYTES, &[], msg).unwrap();
  let a = Blake2b::digest(BYTES, &key_a, msg).unwrap();
  let b = Blake2b::digest(BYTES, &key_b, msg).unwrap();
  let salted = Blake2b::digest_salt_personal(BYTES, &key_a, &salt, &personal, msg).unwrap();
  let repersonalized = Blake2b::digest_salt_personal(BYTES, &key_a, &salt, &other_personal, msg).unwrap();

  assert_ne!(unkeyed, a);
  assert_ne!(a, b);
  assert_ne!(a, salted);
  assert_ne!(salted, repersonalized);
}

#[test]
fn output_length_is_not_a_prefix_of_a_longer_digest() {
  let short = Blake2b::digest(32, &[], b"abc").unwrap();
  let long = Blake2b::digest(64, &[], b"abc").unwrap();
  assert_ne!(short.as_bytes(), &long.as_bytes()[..32]);
}

#[test]
fn verify_checks_tags() {
  let key = generate_key();
  let tag = Blake2b::digest(BYTES, key.as_slice(), b"payload").unwrap();

  let mut h = Blake2b::new(BYTES, key.as_slice()).unwrap();
  h.update(b"payload").unwrap();
  assert!(h.verify(tag.as_bytes()).is_ok());

  let mut h = Blake2b::new(BYTES, key.as_slice()).unwrap();
  h.update(b"payloaD").unwrap();
  assert!(h.verify(tag.as_bytes()).is_err());
}

#[test]
fn vectored_and_writer_inputs_match_contiguous() {
  let expected = Blake2b::digest(48, &[], b"hello, world").unwrap();

  let mut h = Blake2b::new(48, &[]).unwrap();
  h.update_vectored(&[&b"hello"[..], &b", "[..], &b"world"[..]]).unwrap();
  assert_eq!(h.finalize().unwrap(), expected);

  let mut h = Blake2b::new(48, &[]).unwrap();
  h.update_io_slices(&[IoSlice::new(b"hello, "), IoSlice::new(b"world")])
    .unwrap();
  assert_eq!(h.finalize().unwrap(), expected);

  let mut w = Blake2b::new(48, &[]).unwrap().writer(Vec::new());
  w.write_all(b"hello, world").unwrap();
  let (sink, mut h) = w.into_parts();
  assert_eq!(sink, b"hello, world");
  assert_eq!(h.finalize().unwrap(), expected);
}

#[test]
fn engines_move_between_threads() {
  let mut h = Blake2b::new(BYTES, &[]).unwrap();
  h.update(b"part one, ").unwrap();
  let out = std::thread::spawn(move || {
    h.update(b"part two").unwrap();
    h.finalize().unwrap()
  })
  .join()
  .unwrap();
  assert_eq!(out, Blake2b::digest(BYTES, &[], b"part one, part two").unwrap());
}

#[test]
fn init_is_idempotent_across_threads() {
  let winners: usize = (0..8)
    .map(|_| std::thread::spawn(hashes::init))
    .collect::<Vec<_>>()
    .into_iter()
    .map(|t| usize::from(t.join().unwrap()))
    .sum();

  // Another test may have constructed an engine first, which initializes too.
  assert!(winners <= 1);
  assert!(hashes::is_initialized());
  assert!(!hashes::init());
}
