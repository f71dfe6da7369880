//! Named function shapes beyond what `Fn*` spells out directly.
//!
//! Every trait has a blanket impl over the matching closure type, so plain
//! closures can be passed wherever these are expected. The `WithError`
//! variants are the fallible forms: their closures return `Result`.

macro_rules! function_trait {
    ($(#[$meta:meta])* $name:ident, $method:ident, ($($arg:ident: $ty:ident),*)) => {
        $(#[$meta])*
        pub trait $name<$($ty,)* R> {
            fn $method(&self, $($arg: $ty),*) -> R;
        }

        impl<F, $($ty,)* R> $name<$($ty,)* R> for F
        where
            F: Fn($($ty),*) -> R,
        {
            fn $method(&self, $($arg: $ty),*) -> R {
                self($($arg),*)
            }
        }
    };
}

macro_rules! fallible_trait {
    ($(#[$meta:meta])* $name:ident, $method:ident, ($($arg:ident: $ty:ident),*) -> $out:ty) => {
        $(#[$meta])*
        pub trait $name<$($ty,)* R, E> {
            fn $method(&mut self, $($arg: $ty),*) -> Result<$out, E>;
        }

        impl<F, $($ty,)* R, E> $name<$($ty,)* R, E> for F
        where
            F: FnMut($($ty),*) -> Result<$out, E>,
        {
            fn $method(&mut self, $($arg: $ty),*) -> Result<$out, E> {
                self($($arg),*)
            }
        }
    };
}

function_trait!(
    /// Function of three arguments
    TriFunction, apply, (a: A, b: B, c: C)
);
function_trait!(
    /// Function of four arguments
    QuadFunction, apply, (a: A, b: B, c: C, d: D)
);

/// Consumer of three arguments
pub trait TriConsumer<A, B, C> {
    fn accept(&mut self, a: A, b: B, c: C);
}

impl<F, A, B, C> TriConsumer<A, B, C> for F
where
    F: FnMut(A, B, C),
{
    fn accept(&mut self, a: A, b: B, c: C) {
        self(a, b, c)
    }
}

fallible_trait!(SupplierWithError, get, () -> R);
fallible_trait!(FunctionWithError, apply, (a: A) -> R);
fallible_trait!(BiFunctionWithError, apply, (a: A, b: B) -> R);
fallible_trait!(TriFunctionWithError, apply, (a: A, b: B, c: C) -> R);
fallible_trait!(QuadFunctionWithError, apply, (a: A, b: B, c: C, d: D) -> R);

// Consumers are functions whose success value is `()`
pub trait ConsumerWithError<A, E>: FunctionWithError<A, (), E> {}
impl<T, A, E> ConsumerWithError<A, E> for T where T: FunctionWithError<A, (), E> {}

pub trait BiConsumerWithError<A, B, E>: BiFunctionWithError<A, B, (), E> {}
impl<T, A, B, E> BiConsumerWithError<A, B, E> for T where T: BiFunctionWithError<A, B, (), E> {}

pub trait TriConsumerWithError<A, B, C, E>: TriFunctionWithError<A, B, C, (), E> {}
impl<T, A, B, C, E> TriConsumerWithError<A, B, C, E> for T where
    T: TriFunctionWithError<A, B, C, (), E>
{
}

pub trait QuadConsumerWithError<A, B, C, D, E>: QuadFunctionWithError<A, B, C, D, (), E> {}
impl<T, A, B, C, D, E> QuadConsumerWithError<A, B, C, D, E> for T where
    T: QuadFunctionWithError<A, B, C, D, (), E>
{
}
