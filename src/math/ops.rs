//! Operator suite shared by [`Vector2`](super::Vector2),
//! [`Vector3`](super::Vector3) and [`Vector4`](super::Vector4).
//!
//! Every mixed-type operation converts both operands through
//! [`Promote`](super::Promote) before doing the arithmetic, so the result
//! type of `Vector<L> op Vector<R>` is always `Vector<Promoted<L, R>>`.
//! Compound assignment narrows the promoted result back into the left-hand
//! scalar type.

macro_rules! impl_vector {
    ($Vector:ident, $n:literal, [$($field:ident: $idx:literal),+]) => {
        impl<S: $crate::math::Scalar> $Vector<S> {
            /// Returns the zero vector.
            #[must_use]
            pub fn zeros() -> Self {
                Self { $($field: S::zero()),+ }
            }

            /// Returns the components in order.
            #[must_use]
            pub fn to_array(self) -> [S; $n] {
                [$(self.$field),+]
            }

            /// Applies `f` to every component.
            #[must_use]
            pub fn map<T, F>(self, mut f: F) -> $Vector<T>
            where
                T: $crate::math::Scalar,
                F: FnMut(S) -> T,
            {
                $Vector { $($field: f(self.$field)),+ }
            }

            /// Combines same-positioned components of `self` and `rhs` with `f`.
            #[must_use]
            pub fn zip_map<R, T, F>(self, rhs: $Vector<R>, mut f: F) -> $Vector<T>
            where
                R: $crate::math::Scalar,
                T: $crate::math::Scalar,
                F: FnMut(S, R) -> T,
            {
                $Vector { $($field: f(self.$field, rhs.$field)),+ }
            }

            /// Converts every component with an `as` cast.
            ///
            /// Float to integer conversions truncate toward zero and saturate
            /// at the bounds of the target type.
            #[must_use]
            pub fn cast<T>(self) -> $Vector<T>
            where
                T: $crate::math::Scalar,
                S: ::num_traits::AsPrimitive<T>,
            {
                self.map(::num_traits::AsPrimitive::as_)
            }

            /// Converts every component, rejecting values `T` cannot hold.
            ///
            /// # Errors
            ///
            /// Returns [`ConversionError::NotRepresentable`](crate::error::ConversionError::NotRepresentable)
            /// for the first component that is NaN or out of range for `T`.
            pub fn try_cast<T>(self) -> $crate::error::Result<$Vector<T>>
            where
                T: $crate::math::Scalar + ::num_traits::NumCast,
                S: ::num_traits::ToPrimitive,
            {
                $crate::math::checked_cast(self.to_array()).map($Vector::from)
            }

            /// Overwrites `self` with a converted copy of `source`.
            pub fn assign_from<O>(&mut self, source: &$Vector<O>)
            where
                O: $crate::math::Scalar + ::num_traits::AsPrimitive<S>,
            {
                *self = source.cast();
            }

            /// Sum of the products of same-positioned components.
            #[must_use]
            pub fn dot<R>(self, rhs: $Vector<R>) -> $crate::math::Promoted<S, R>
            where
                R: $crate::math::Scalar,
                S: $crate::math::Promote<R>,
            {
                let mut sum = <$crate::math::Promoted<S, R> as ::num_traits::Zero>::zero();
                $(
                    sum = sum
                        + self.$field.promote_lhs()
                            * <S as $crate::math::Promote<R>>::promote_rhs(rhs.$field);
                )+
                sum
            }

            /// Squared length, in the vector's own scalar type.
            #[must_use]
            pub fn length_squared(self) -> $crate::math::Promoted<S, S>
            where
                S: $crate::math::Promote,
            {
                self.dot(self)
            }

            /// Euclidean length.
            ///
            /// `f32` vectors are measured in `f32`; every other scalar type is
            /// measured in `f64`.
            #[must_use]
            pub fn length(self) -> S::Float
            where
                S: $crate::math::FloatPrecision,
            {
                let mut sum = <S::Float as ::num_traits::Zero>::zero();
                $(
                    let c = self.$field.to_float();
                    sum = sum + c * c;
                )+
                ::num_traits::Float::sqrt(sum)
            }

            /// Divides the vector by its length.
            ///
            /// A zero vector is not special-cased: the division yields NaN
            /// components.
            #[must_use]
            pub fn normalize(self) -> $Vector<S::Float>
            where
                S: $crate::math::FloatPrecision,
            {
                let length = self.length();
                self.map(|c| c.to_float() / length)
            }

            /// Reflects `self` about `normal`: `self - 2 * dot(self, normal) * normal`.
            ///
            /// `normal` is expected to be unit length.
            #[must_use]
            pub fn reflect<N>(self, normal: $Vector<N>) -> $Vector<$crate::math::Promoted<S, N>>
            where
                N: $crate::math::Scalar,
                S: $crate::math::Promote<N>,
            {
                let d = self.dot(normal);
                let twice = d + d;
                self.zip_map(normal, |i, n| {
                    i.promote_lhs() - twice * <S as $crate::math::Promote<N>>::promote_rhs(n)
                })
            }

            /// Whether every component is less than the matching one in `rhs`.
            #[must_use]
            pub fn all_lt<R>(self, rhs: $Vector<R>) -> bool
            where
                R: $crate::math::Scalar,
                S: $crate::math::Promote<R>,
            {
                true $(&& self.$field.promote_lhs()
                    < <S as $crate::math::Promote<R>>::promote_rhs(rhs.$field))+
            }

            /// Whether every component is less than or equal to the matching one in `rhs`.
            #[must_use]
            pub fn all_le<R>(self, rhs: $Vector<R>) -> bool
            where
                R: $crate::math::Scalar,
                S: $crate::math::Promote<R>,
            {
                true $(&& self.$field.promote_lhs()
                    <= <S as $crate::math::Promote<R>>::promote_rhs(rhs.$field))+
            }

            /// Whether every component is greater than the matching one in `rhs`.
            #[must_use]
            pub fn all_gt<R>(self, rhs: $Vector<R>) -> bool
            where
                R: $crate::math::Scalar,
                S: $crate::math::Promote<R>,
            {
                true $(&& self.$field.promote_lhs()
                    > <S as $crate::math::Promote<R>>::promote_rhs(rhs.$field))+
            }

            /// Whether every component is greater than or equal to the matching one in `rhs`.
            #[must_use]
            pub fn all_ge<R>(self, rhs: $Vector<R>) -> bool
            where
                R: $crate::math::Scalar,
                S: $crate::math::Promote<R>,
            {
                true $(&& self.$field.promote_lhs()
                    >= <S as $crate::math::Promote<R>>::promote_rhs(rhs.$field))+
            }
        }

        impl<S: $crate::math::Scalar> Default for $Vector<S> {
            fn default() -> Self {
                Self::zeros()
            }
        }

        impl<S: $crate::math::Scalar> From<[S; $n]> for $Vector<S> {
            fn from([$($field),+]: [S; $n]) -> Self {
                Self { $($field),+ }
            }
        }

        impl<S: $crate::math::Scalar> From<$Vector<S>> for [S; $n] {
            fn from(v: $Vector<S>) -> Self {
                v.to_array()
            }
        }

        impl<S: $crate::math::Scalar> TryFrom<&[S]> for $Vector<S> {
            type Error = $crate::error::GeomError;

            fn try_from(slice: &[S]) -> $crate::error::Result<Self> {
                let array: [S; $n] = slice.try_into().map_err(|_| {
                    $crate::error::GeomError::ComponentCount {
                        expected: $n,
                        found: slice.len(),
                    }
                })?;
                Ok(array.into())
            }
        }

        impl<S: $crate::math::Scalar> ::std::ops::Index<usize> for $Vector<S> {
            type Output = S;

            fn index(&self, index: usize) -> &S {
                match index {
                    $($idx => &self.$field,)+
                    _ => panic!(
                        "index out of bounds: {} has {} components but the index is {index}",
                        stringify!($Vector),
                        $n
                    ),
                }
            }
        }

        impl<S: $crate::math::Scalar> ::std::ops::IndexMut<usize> for $Vector<S> {
            fn index_mut(&mut self, index: usize) -> &mut S {
                match index {
                    $($idx => &mut self.$field,)+
                    _ => panic!(
                        "index out of bounds: {} has {} components but the index is {index}",
                        stringify!($Vector),
                        $n
                    ),
                }
            }
        }

        impl<S: $crate::math::Scalar + ::std::fmt::Display> ::std::fmt::Display for $Vector<S> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str("(")?;
                for (i, c) in self.to_array().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    ::std::fmt::Display::fmt(c, f)?;
                }
                f.write_str(")")
            }
        }

        impl<S: $crate::math::Scalar + ::std::hash::Hash> ::std::hash::Hash for $Vector<S> {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                $(::std::hash::Hash::hash(&self.$field, state);)+
            }
        }

        impl<L, R> PartialEq<$Vector<R>> for $Vector<L>
        where
            L: $crate::math::Promote<R>,
            R: $crate::math::Scalar,
        {
            fn eq(&self, other: &$Vector<R>) -> bool {
                true $(&& self.$field.promote_lhs()
                    == <L as $crate::math::Promote<R>>::promote_rhs(other.$field))+
            }
        }

        impl<S> Eq for $Vector<S> where S: $crate::math::Promote + Eq {}

        // Ordering is conjunctive: `a < b` holds only when it holds for every
        // component, so two vectors may be neither less, equal nor greater.
        impl<L, R> PartialOrd<$Vector<R>> for $Vector<L>
        where
            L: $crate::math::Promote<R>,
            R: $crate::math::Scalar,
        {
            fn partial_cmp(&self, other: &$Vector<R>) -> Option<::std::cmp::Ordering> {
                if self == other {
                    Some(::std::cmp::Ordering::Equal)
                } else if self.all_lt(*other) {
                    Some(::std::cmp::Ordering::Less)
                } else if self.all_gt(*other) {
                    Some(::std::cmp::Ordering::Greater)
                } else {
                    None
                }
            }

            fn lt(&self, other: &$Vector<R>) -> bool {
                self.all_lt(*other)
            }

            fn le(&self, other: &$Vector<R>) -> bool {
                self.all_le(*other)
            }

            fn gt(&self, other: &$Vector<R>) -> bool {
                self.all_gt(*other)
            }

            fn ge(&self, other: &$Vector<R>) -> bool {
                self.all_ge(*other)
            }
        }

        impl<S> ::std::ops::Neg for $Vector<S>
        where
            S: $crate::math::Scalar + ::std::ops::Neg<Output = S>,
        {
            type Output = Self;

            fn neg(self) -> Self {
                self.map(|c| -c)
            }
        }

        $crate::math::ops::impl_vector_binop!($Vector, Add, add, AddAssign, add_assign, +);
        $crate::math::ops::impl_vector_binop!($Vector, Sub, sub, SubAssign, sub_assign, -);
        $crate::math::ops::impl_vector_binop!($Vector, Mul, mul, MulAssign, mul_assign, *);
        $crate::math::ops::impl_vector_binop!($Vector, Div, div, DivAssign, div_assign, /);

        $crate::math::ops::impl_vector_scalar_op!($Vector, Mul, mul, MulAssign, mul_assign, *);
        $crate::math::ops::impl_vector_scalar_op!($Vector, Div, div, DivAssign, div_assign, /);

        $crate::math::ops::impl_scalar_lhs_mul!($Vector: i32, u32, i64, u64, f32, f64);

        impl<S> ::approx::AbsDiffEq for $Vector<S>
        where
            S: $crate::math::Promote + ::approx::AbsDiffEq,
            <S as ::approx::AbsDiffEq>::Epsilon: Copy,
        {
            type Epsilon = <S as ::approx::AbsDiffEq>::Epsilon;

            fn default_epsilon() -> Self::Epsilon {
                S::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                true $(&& self.$field.abs_diff_eq(&other.$field, epsilon))+
            }
        }

        impl<S> ::approx::RelativeEq for $Vector<S>
        where
            S: $crate::math::Promote + ::approx::RelativeEq,
            <S as ::approx::AbsDiffEq>::Epsilon: Copy,
        {
            fn default_max_relative() -> Self::Epsilon {
                S::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                true $(&& self.$field.relative_eq(&other.$field, epsilon, max_relative))+
            }
        }

        impl<S> ::approx::UlpsEq for $Vector<S>
        where
            S: $crate::math::Promote + ::approx::UlpsEq,
            <S as ::approx::AbsDiffEq>::Epsilon: Copy,
        {
            fn default_max_ulps() -> u32 {
                S::default_max_ulps()
            }

            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                true $(&& self.$field.ulps_eq(&other.$field, epsilon, max_ulps))+
            }
        }
    };
}

/// Elementwise `Vector<L> op Vector<R>` and its compound assignment.
macro_rules! impl_vector_binop {
    ($Vector:ident, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl<L, R> ::std::ops::$Op<$Vector<R>> for $Vector<L>
        where
            L: $crate::math::Promote<R>,
            R: $crate::math::Scalar,
        {
            type Output = $Vector<$crate::math::Promoted<L, R>>;

            #[inline]
            fn $op(self, rhs: $Vector<R>) -> Self::Output {
                self.zip_map(rhs, |l, r| {
                    l.promote_lhs() $sym <L as $crate::math::Promote<R>>::promote_rhs(r)
                })
            }
        }

        impl<L, R> ::std::ops::$OpAssign<$Vector<R>> for $Vector<L>
        where
            L: $crate::math::Promote<R>,
            R: $crate::math::Scalar,
            $crate::math::Promoted<L, R>: ::num_traits::AsPrimitive<L>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: $Vector<R>) {
                *self = <Self as ::std::ops::$Op<$Vector<R>>>::$op(*self, rhs).cast();
            }
        }
    };
}

/// `Vector<L> op R` for a scalar `R` and its compound assignment.
///
/// Vector types never implement [`Scalar`](super::Scalar), so a vector
/// right-hand operand can only select the elementwise overload.
macro_rules! impl_vector_scalar_op {
    ($Vector:ident, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl<L, R> ::std::ops::$Op<R> for $Vector<L>
        where
            L: $crate::math::Promote<R>,
            R: $crate::math::Scalar,
        {
            type Output = $Vector<$crate::math::Promoted<L, R>>;

            #[inline]
            fn $op(self, rhs: R) -> Self::Output {
                let rhs = <L as $crate::math::Promote<R>>::promote_rhs(rhs);
                self.map(|l| l.promote_lhs() $sym rhs)
            }
        }

        impl<L, R> ::std::ops::$OpAssign<R> for $Vector<L>
        where
            L: $crate::math::Promote<R>,
            R: $crate::math::Scalar,
            $crate::math::Promoted<L, R>: ::num_traits::AsPrimitive<L>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: R) {
                *self = <Self as ::std::ops::$Op<R>>::$op(*self, rhs).cast();
            }
        }
    };
}

/// `scalar * Vector<R>` for the built-in scalars.
macro_rules! impl_scalar_lhs_mul {
    ($Vector:ident: $($t:ty),*) => {
        $(
            impl<R> ::std::ops::Mul<$Vector<R>> for $t
            where
                $t: $crate::math::Promote<R>,
                R: $crate::math::Scalar,
            {
                type Output = $Vector<$crate::math::Promoted<$t, R>>;

                #[inline]
                fn mul(self, rhs: $Vector<R>) -> Self::Output {
                    let lhs = <$t as $crate::math::Promote<R>>::promote_lhs(self);
                    rhs.map(|r| lhs * <$t as $crate::math::Promote<R>>::promote_rhs(r))
                }
            }
        )*
    };
}

pub(crate) use impl_scalar_lhs_mul;
pub(crate) use impl_vector;
pub(crate) use impl_vector_binop;
pub(crate) use impl_vector_scalar_op;
