/// Implements `CompositeGeometryTrait` and a list-style `Debug` for a newtype over `Vec<Item>`.
#[macro_export]
macro_rules! impl_composite_geometry {
	($($t:ty, $i:ty),*) => {$(
		impl $crate::CompositeGeometryTrait<$i> for $t {
			fn as_slice(&self) -> &[$i] {
				&self.0
			}
			fn into_inner(self) -> Vec<$i> {
				self.0
			}
		}

		impl std::fmt::Debug for $t {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.debug_list().entries(&self.0).finish()
			}
		}
	)*}
}

/// Two geometries of the same type are equal iff their ordered point sequences are equal.
#[macro_export]
macro_rules! impl_point_sequence_eq {
	($($t:ty),*) => {$(
		impl PartialEq for $t {
			fn eq(&self, other: &Self) -> bool {
				$crate::GeometryTrait::points(self) == $crate::GeometryTrait::points(other)
			}
		}
	)*}
}
