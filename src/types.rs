//! Key and weight representations the graph store is generic over.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Unsigned integer vertex identifier.
///
/// Keys index directly into per-vertex slots, so `index` must be the
/// zero-based slot of the key and `from_usize` its inverse.
pub trait VertexKey:
    Copy + Ord + Hash + Debug + Display + Send + Sync + 'static
{
    /// Zero-based slot index of this key.
    fn index(self) -> usize;
    /// Key occupying the given slot.
    fn from_usize(i: usize) -> Self;
}

macro_rules! impl_vertex_key {
    ($($t:ty),*) => {$(
        impl VertexKey for $t {
            #[inline]
            fn index(self) -> usize {
                self as usize
            }
            #[inline]
            fn from_usize(i: usize) -> Self {
                i as $t
            }
        }
    )*};
}

impl_vertex_key!(u16, u32, u64, usize);

/// Edge weight value.
pub trait EdgeWeight:
    Copy + PartialEq + PartialOrd + Debug + Display + Send + Sync + 'static
{
    /// Additive identity, used for malformed weight tokens.
    fn zero() -> Self;
    /// Default weight of an unweighted edge.
    fn one() -> Self;
    /// Narrows a parsed `f64` token into this representation.
    fn from_f64(w: f64) -> Self;
    /// Widens back to `f64` for emission.
    fn to_f64(self) -> f64;
}

macro_rules! impl_edge_weight {
    ($($t:ty),*) => {$(
        impl EdgeWeight for $t {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
            #[inline]
            fn from_f64(w: f64) -> Self {
                w as $t
            }
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_edge_weight!(f32, f64);

/// Runtime selection of the vertex key representation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyWidth {
    /// 32-bit vertex keys.
    #[default]
    U32,
    /// 64-bit vertex keys.
    U64,
}

/// Runtime selection of the edge weight representation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WeightType {
    /// Single-precision weights.
    #[default]
    F32,
    /// Double-precision weights.
    F64,
}
