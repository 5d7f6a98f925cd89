//! Cross-kind equality: any two lists in the crate are equal when they hold
//! pairwise-equal elements in the same order, whatever their concrete types.

use crate::list::list_equals;
use crate::{ArrayAdapter, FastList, ListAdapter, Vec};

macro_rules! impl_list_eq {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
        impl<$($vars)*> PartialEq<$rhs> for $lhs
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool {
                list_equals(self.as_slice(), other)
            }
        }
    };
}

macro_rules! impl_slice_eq {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
        impl<$($vars)*> PartialEq<$rhs> for $lhs
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool {
                self.as_slice() == &other[..]
            }
        }
    };
}

impl<T, U> PartialEq<ArrayAdapter<U>> for ArrayAdapter<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &ArrayAdapter<U>) -> bool {
        self.array_adapter_equals(other)
    }
}

impl_list_eq! { [T, U] ArrayAdapter<T>, FastList<U> }
impl_list_eq! { ['b, T, U] ArrayAdapter<T>, ListAdapter<'b, U> }
impl_list_eq! { [T, U] FastList<T>, FastList<U> }
impl_list_eq! { [T, U] FastList<T>, ArrayAdapter<U> }
impl_list_eq! { ['b, T, U] FastList<T>, ListAdapter<'b, U> }
impl_list_eq! { ['a, 'b, T, U] ListAdapter<'a, T>, ListAdapter<'b, U> }
impl_list_eq! { ['a, T, U] ListAdapter<'a, T>, ArrayAdapter<U> }
impl_list_eq! { ['a, T, U] ListAdapter<'a, T>, FastList<U> }

impl_slice_eq! { [T, U] ArrayAdapter<T>, [U] }
impl_slice_eq! { [T, U] ArrayAdapter<T>, Vec<U> }
impl_slice_eq! { [T, U, const N: usize] ArrayAdapter<T>, [U; N] }
impl_slice_eq! { [T, U] FastList<T>, [U] }
impl_slice_eq! { [T, U] FastList<T>, Vec<U> }
impl_slice_eq! { [T, U, const N: usize] FastList<T>, [U; N] }
impl_slice_eq! { ['a, T, U] ListAdapter<'a, T>, [U] }
impl_slice_eq! { ['a, T, U] ListAdapter<'a, T>, Vec<U> }
impl_slice_eq! { ['a, T, U, const N: usize] ListAdapter<'a, T>, [U; N] }

impl<T: Eq> Eq for FastList<T> {}

impl<T: Eq> Eq for ListAdapter<'_, T> {}
