//! Serde helpers for user-typed enum values

/// Implement case-insensitive deserialization for a fieldless enum
///
/// Configuration authors write `MANY_TO_ONE`, `Many_To_One` or
/// `many_to_one` interchangeably; all of them map to the same variant.
///
/// ```ignore
/// impl_case_insensitive_deserialize!(
///     ColorScheme,
///     Dark => "dark",
///     Light => "light"
/// );
/// ```
#[macro_export]
macro_rules! impl_case_insensitive_deserialize {
    ($enum_type:ty, $($variant:ident => $str_val:expr),+ $(,)?) => {
        impl<'de> serde::Deserialize<'de> for $enum_type {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                match s.to_lowercase().as_str() {
                    $(
                        $str_val => Ok(Self::$variant),
                    )+
                    _ => Err(serde::de::Error::custom(format!(
                        "unknown variant '{}', expected one of: {}",
                        s,
                        [$($str_val),+].join(", ")
                    ))),
                }
            }
        }
    };
}
