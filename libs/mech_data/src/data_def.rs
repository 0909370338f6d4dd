macro_rules! define_data_enum {
    {
        $(#[$container_attr:meta])*
        $enum_vis:vis enum $Enum:ident for $data_vis:vis $Data:ident {
            $($(#[$data_field_attr:meta])* $data_field_vis:vis $data_field:ident : $DataFieldTy:ty),* ;
            $($(#[$variant_attr:meta])* $variant:ident $arg:tt),* $(,)?
        }
    } => {
        #[derive(Debug, Clone)]
        #[non_exhaustive]
        $data_vis struct $Data {
            $(
                $(#[$data_field_attr])*
                $data_field_vis $data_field : $DataFieldTy
            ),*
        }

        $(#[$container_attr])*
        #[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        $enum_vis enum $Enum {
            $(
                $(#[$variant_attr])*
                $variant
            ),*
        }

        impl $Enum {
            /// All known values of this enumeration.
            pub const ALL: &[$Enum] = &[$(Self::$variant),*];

            /// Gets the entire associated data structure.
            #[must_use]
            $data_vis const fn data(self) -> &'static $Data {
                const fn make_val($($data_field : $DataFieldTy),*) -> $Data {
                    $Data { $($data_field),* }
                }

                match self {
                    $(
                        Self::$variant => const { &make_val $arg }
                    ),*
                }
            }

            $(
                $(#[$data_field_attr])*
                #[must_use]
                #[inline]
                $data_field_vis const fn $data_field (self) -> $DataFieldTy {
                    self.data().$data_field
                }
            )*
        }
    };
}

pub(crate) use define_data_enum;
