/// Declare a table of native functions and generate their wrappers.
///
/// ```ignore
/// libvirt_api! {
///     pub(crate) struct StreamSymbols => stream, Core;
///
///     fn virStreamFinish(stream: virStreamPtr) -> c_int [Negative];
/// }
/// ```
///
/// expands to a `StreamSymbols` struct holding one [`SymbolSlot`] per function
/// (stored in the `stream` field of [`Libvirt`]) and an
/// `unsafe fn virStreamFinish(&self, stream, err: &mut VirError) -> c_int`
/// method on [`Libvirt`]. The bracketed [`Failure`] says how the native
/// function reports failure.
///
/// Tables prefixed with `raw` produce wrappers without the error record. They
/// are for the error-reporting entry points themselves.
///
/// [`SymbolSlot`]: crate::loader::SymbolSlot
/// [`Libvirt`]: crate::api::Libvirt
/// [`Failure`]: crate::loader::Failure
macro_rules! libvirt_api {
    (@symbols $vis:vis $symbols:ident {
        $( $name:ident($($ty:ty),*) -> $ret:ty; )*
    }) => {
        #[derive(Default)]
        #[allow(non_snake_case)]
        $vis struct $symbols {
            $( $name: $crate::loader::SymbolSlot<unsafe extern "C" fn($($ty),*) -> $ret>, )*
        }
    };

    (
        raw $vis:vis struct $symbols:ident => $field:ident, $library:ident;
        $(
            $(#[$meta:meta])*
            fn $name:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty [$failure:ident];
        )*
    ) => {
        libvirt_api!(@symbols $vis $symbols { $( $name($($ty),*) -> $ret; )* });

        #[allow(non_snake_case, clippy::missing_safety_doc)]
        impl $crate::api::Libvirt {
            $(
                $(#[$meta])*
                pub unsafe fn $name(&self, $($arg: $ty),*) -> $ret {
                    let failure = $crate::loader::Failure::$failure;
                    match self.$field.$name.resolve(
                        &*self.source,
                        $crate::loader::Library::$library,
                        stringify!($name),
                    ) {
                        Some(native) => native($($arg),*),
                        None => {
                            tracing::debug!(symbol = stringify!($name), "Returning sentinel for unavailable symbol");
                            <$ret as $crate::loader::NativeReturn>::sentinel(failure)
                        }
                    }
                }
            )*
        }
    };

    (
        $vis:vis struct $symbols:ident => $field:ident, $library:ident;
        $(
            $(#[$meta:meta])*
            fn $name:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty [$failure:ident];
        )*
    ) => {
        libvirt_api!(@symbols $vis $symbols { $( $name($($ty),*) -> $ret; )* });

        #[allow(
            non_snake_case,
            clippy::too_many_arguments,
            clippy::missing_safety_doc,
            clippy::let_unit_value
        )]
        impl $crate::api::Libvirt {
            $(
                $(#[$meta])*
                pub unsafe fn $name(&self, $($arg: $ty,)* err: &mut $crate::error::VirError) -> $ret {
                    let failure = $crate::loader::Failure::$failure;
                    let Some(native) = self.$field.$name.resolve(
                        &*self.source,
                        $crate::loader::Library::$library,
                        stringify!($name),
                    ) else {
                        tracing::debug!(symbol = stringify!($name), "Returning sentinel for unavailable symbol");
                        return <$ret as $crate::loader::NativeReturn>::sentinel(failure);
                    };

                    let ret = native($($arg),*);
                    if $crate::loader::NativeReturn::is_failure(ret, failure) {
                        self.copy_last_error(err);
                    }
                    ret
                }
            )*
        }
    };
}
