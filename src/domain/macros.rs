/// Declares a closed wire enum with `snake_case` names and wires it into
/// [`ApiEnum`](crate::domain::enums::ApiEnum).
macro_rules! known_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            strum::Display,
            strum::EnumString,
            strum::AsRefStr,
            strum::EnumIter,
        )]
        #[strum(serialize_all = "snake_case")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $crate::domain::enums::KnownEnum for $name {
            const NAME: &'static str = stringify!($name);
        }

        impl $crate::domain::raw::ToRaw for $name {
            fn to_raw(self) -> serde_json::Value {
                serde_json::Value::String(AsRef::<str>::as_ref(&self).to_string())
            }
        }
    };
}

/// Declares a model backed by [`RawFields`](crate::domain::raw::RawFields).
///
/// Each field line reads `kind getter / setter: Type = "json_key";` where kind is
/// one of:
///
/// * `required` - getter returns `Result<T>`, missing or null is an error.
/// * `optional` - getter returns `Result<Option<T>>`, setting `None` removes the key.
/// * `nullable` - getter returns `Result<Option<T>>`, setting `None` stores `null`.
macro_rules! raw_model {
    (@accessors required [$($attr:tt)*] $getter:ident $setter:ident $ty:ty, $key:literal) => {
        $($attr)*
        pub fn $getter(&self) -> $crate::utils::error::Result<$ty> {
            self.raw.required($key)
        }

        pub fn $setter(&mut self, value: impl Into<$ty>) -> &mut Self {
            self.raw.set::<$ty>($key, value.into());
            self
        }
    };
    (@accessors optional [$($attr:tt)*] $getter:ident $setter:ident $ty:ty, $key:literal) => {
        $($attr)*
        pub fn $getter(&self) -> $crate::utils::error::Result<Option<$ty>> {
            self.raw.optional($key)
        }

        pub fn $setter(&mut self, value: Option<$ty>) -> &mut Self {
            self.raw.set_optional::<$ty>($key, value);
            self
        }
    };
    (@accessors nullable [$($attr:tt)*] $getter:ident $setter:ident $ty:ty, $key:literal) => {
        $($attr)*
        pub fn $getter(&self) -> $crate::utils::error::Result<Option<$ty>> {
            self.raw.optional($key)
        }

        pub fn $setter(&mut self, value: Option<$ty>) -> &mut Self {
            self.raw.set_nullable::<$ty>($key, value);
            self
        }
    };
    (@validate $raw:ident required $ty:ty, $key:literal) => {
        $raw.validate_required::<$ty>($key)?;
    };
    (@validate $raw:ident optional $ty:ty, $key:literal) => {
        $raw.validate_present::<$ty>($key)?;
    };
    (@validate $raw:ident nullable $ty:ty, $key:literal) => {
        $raw.validate_present::<$ty>($key)?;
    };
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $kind:ident $getter:ident / $setter:ident : $ty:ty = $key:literal;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name {
            raw: $crate::domain::raw::RawFields,
        }

        impl $crate::domain::raw::RawModel for $name {
            const FIELDS: &'static [&'static str] = &[$($key),*];

            fn raw(&self) -> &$crate::domain::raw::RawFields {
                &self.raw
            }

            fn raw_mut(&mut self) -> &mut $crate::domain::raw::RawFields {
                &mut self.raw
            }

            fn from_raw(raw: $crate::domain::raw::RawFields) -> Self {
                Self { raw }
            }
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                raw_model!(@accessors $kind [$(#[$fmeta])*] $getter $setter $ty, $key);
            )*
        }

        impl $crate::utils::validation::Validate for $name {
            fn validate(&self) -> $crate::utils::error::Result<()> {
                let raw = &self.raw;
                $(
                    raw_model!(@validate raw $kind $ty, $key);
                )*
                let _ = raw;
                Ok(())
            }
        }

        impl $crate::domain::raw::ToRaw for $name {
            fn to_raw(self) -> serde_json::Value {
                serde_json::Value::Object(self.raw.into_map())
            }
        }
    };
}
