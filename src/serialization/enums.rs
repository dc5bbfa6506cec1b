//! Conversions between Spotify's string tokens and in-memory enumerations.
//!
//! [`string_enum!`] declares a plain enumeration with one token per variant.
//! [`flag_set!`] declares a bitset whose wire form is one token per set bit:
//! decoding ORs every token into the empty set, encoding walks the flags in
//! ascending bit order.

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_spotify_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $token ),+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(token: &str) -> Result<Self, Self::Err> {
                match token {
                    $( $token => Ok($name::$variant), )+
                    _ => Err($crate::error::Error::invalid_enum(stringify!($name), token)),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_spotify_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_spotify_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let token = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                token.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

macro_rules! flag_set {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$flag_meta:meta])* const $flag:ident = $bit:literal => $token:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name(u32);

        impl $name {
            $( $(#[$flag_meta])* pub const $flag: $name = $name(1 << $bit); )+

            // ascending bit order
            const FLAGS: &'static [($name, &'static str)] = &[$( ($name::$flag, $token) ),+];

            pub const fn empty() -> Self {
                $name(0)
            }

            pub fn all() -> Self {
                Self::FLAGS
                    .iter()
                    .fold(Self::empty(), |all, (flag, _)| all | *flag)
            }

            pub const fn bits(self) -> u32 {
                self.0
            }

            /// Keeps every bit, including ones that name no flag.
            pub const fn from_bits_retain(bits: u32) -> Self {
                $name(bits)
            }

            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            pub fn insert(&mut self, other: Self) {
                self.0 |= other.0;
            }

            /// The individual known flags in `self`, in ascending bit order.
            pub fn iter(self) -> impl Iterator<Item = Self> {
                Self::FLAGS
                    .iter()
                    .map(|(flag, _)| *flag)
                    .filter(move |flag| self.contains(*flag))
            }

            pub fn from_spotify_str(token: &str) -> Result<Self, $crate::error::Error> {
                Self::FLAGS
                    .iter()
                    .find(|(_, known)| *known == token)
                    .map(|(flag, _)| *flag)
                    .ok_or_else(|| $crate::error::Error::invalid_enum(stringify!($name), token))
            }

            pub fn from_spotify_strs<I, S>(tokens: I) -> Result<Self, $crate::error::Error>
            where
                I: IntoIterator<Item = S>,
                S: AsRef<str>,
            {
                tokens.into_iter().try_fold(Self::empty(), |flags, token| {
                    Ok(flags | Self::from_spotify_str(token.as_ref())?)
                })
            }

            /// Encodes a single flag; combinations and unknown bits fail.
            pub fn to_spotify_str(self) -> Result<&'static str, $crate::error::Error> {
                Self::FLAGS
                    .iter()
                    .find(|(flag, _)| *flag == self)
                    .map(|(_, token)| *token)
                    .ok_or_else(|| {
                        $crate::error::Error::invalid_enum(stringify!($name), format!("{:#x}", self.0))
                    })
            }

            pub fn to_spotify_strings(self) -> impl Iterator<Item = &'static str> {
                Self::FLAGS
                    .iter()
                    .filter(move |(flag, _)| self.contains(*flag))
                    .map(|(_, token)| *token)
            }
        }

        impl ::std::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                $name(self.0 | rhs.0)
            }
        }

        impl ::std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl ::std::ops::BitAnd for $name {
            type Output = Self;

            fn bitand(self, rhs: Self) -> Self {
                $name(self.0 & rhs.0)
            }
        }

        impl ::std::iter::FromIterator<$name> for $name {
            fn from_iter<I: IntoIterator<Item = $name>>(iter: I) -> Self {
                iter.into_iter().fold(Self::empty(), |flags, flag| flags | flag)
            }
        }

        /// Space-joined tokens, the form used in query strings and token
        /// responses.
        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                for (index, token) in self.to_spotify_strings().enumerate() {
                    if index > 0 {
                        f.write_str(" ")?;
                    }
                    f.write_str(token)?;
                }
                Ok(())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_seq(self.to_spotify_strings())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let tokens = <Vec<String> as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::from_spotify_strs(tokens).map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use flag_set;
pub(crate) use string_enum;
