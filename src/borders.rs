//! Builtin border artwork, embedded as PNG bytes at compile time.
//!
//! The table is data only; decoding and mask computation live in
//! [`crate::catalog`].

pub(crate) const BUILTIN: &[(&str, &[u8])] = &[
    ("frame", include_bytes!("../assets/borders/frame.png")),
    ("ring", include_bytes!("../assets/borders/ring.png")),
];
