#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        shape: $shape:expr,
        pattern: $pat:literal
        $(, buckets: $buckets:expr)?
        $(, priority: $priority:expr)?
        , prod: |$groups:ident : &[$grp_ty:ty]| -> $ret_ty:ty $body:block
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            shape: $shape,
            regex: $crate::regex!($pat),
            production: Box::new(move |$groups: &[$grp_ty]| -> $ret_ty { $body }),
            buckets: { $crate::engine::BucketMask::empty() $(| $buckets)? },
            priority: { 0 $(+ $priority)? },
        }
    }};
}
