//! Native callables accepted by the binder.
//!
//! Closures and function items are bound through blanket impls, so both
//! `Node::translate` and `|node: &mut Node, x: f64| ...` work without naming
//! any types. The `K` parameter of [`MethodFn`] keeps the `&T` and `&mut T`
//! impls apart; it is always inferred.

use bindery_values::Variant;

use super::signature::for_each_arity;
use crate::CallErrorKind;

/// Marker for methods taking `&T`.
pub enum Const {}

/// Marker for methods taking `&mut T`.
pub enum Mut {}

/// A method of `T` taking parameters `A` and returning `R`.
pub trait MethodFn<T, A, R, K>: Send + Sync + 'static {
    /// Whether the method only reads its receiver.
    const IS_CONST: bool;

    fn invoke(&self, this: &mut T, args: A) -> R;
}

/// A function without a receiver.
pub trait StaticFn<A, R>: Send + Sync + 'static {
    fn invoke(&self, args: A) -> R;
}

/// A method of `T` receiving its arguments as an unchecked dynamic list.
pub trait VarArgFn<T, R>: Send + Sync + 'static {
    fn invoke(&self, this: &mut T, args: &[&Variant]) -> Result<R, CallErrorKind>;
}

impl<F, T, R> VarArgFn<T, R> for F
where
    F: Fn(&mut T, &[&Variant]) -> Result<R, CallErrorKind> + Send + Sync + 'static,
{
    fn invoke(&self, this: &mut T, args: &[&Variant]) -> Result<R, CallErrorKind> {
        self(this, args)
    }
}

macro_rules! impl_native_fn {
    ($count:literal; $(($idx:tt $P:ident $p:ident)),*) => {
        impl<F, T, R, $($P),*> MethodFn<T, ($($P,)*), R, Const> for F
        where
            F: Fn(&T, $($P),*) -> R + Send + Sync + 'static,
        {
            const IS_CONST: bool = true;

            #[inline]
            fn invoke(&self, this: &mut T, ($($p,)*): ($($P,)*)) -> R {
                self(&*this, $($p),*)
            }
        }

        impl<F, T, R, $($P),*> MethodFn<T, ($($P,)*), R, Mut> for F
        where
            F: Fn(&mut T, $($P),*) -> R + Send + Sync + 'static,
        {
            const IS_CONST: bool = false;

            #[inline]
            fn invoke(&self, this: &mut T, ($($p,)*): ($($P,)*)) -> R {
                self(this, $($p),*)
            }
        }

        impl<F, R, $($P),*> StaticFn<($($P,)*), R> for F
        where
            F: Fn($($P),*) -> R + Send + Sync + 'static,
        {
            #[inline]
            fn invoke(&self, ($($p,)*): ($($P,)*)) -> R {
                self($($p),*)
            }
        }
    };
}

for_each_arity!(impl_native_fn);
