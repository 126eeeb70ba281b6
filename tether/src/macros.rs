macro_rules! from_external_error {
    () => {};
    ($head:path $(, $tail:path)*) => {
        impl From<$head> for TetherError {
            fn from(err: $head) -> Self { TetherError::Unhandled(Box::new(err)) }
        }
        from_external_error!($($tail),*);
    };
}
