//! Macro for declaring phase enums.

/// Declare a phase enum and derive its `State` implementation.
///
/// Variant names double as phase names. `final:` and `error:` lists are
/// optional.
///
/// # Example
///
/// Attributes on the enum and its variants pass straight through, so a
/// phase type can pick up extra derives and per-variant docs:
///
/// ```
/// use sequence_game::core::State;
/// use sequence_game::state_enum;
///
/// state_enum! {
///     #[derive(Copy, Default)]
///     pub enum Playback {
///         #[default]
///         Flashing,
///         /// Waiting for the player to press something.
///         Listening,
///         Interrupted,
///     }
///     error: [Interrupted]
/// }
///
/// assert_eq!(Playback::default(), Playback::Flashing);
/// assert_eq!(Playback::Listening.to_string(), "Listening");
/// assert!(Playback::Interrupted.is_error());
/// assert!(!Playback::Interrupted.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}
