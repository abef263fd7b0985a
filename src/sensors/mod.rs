//! Input-side drivers.  The only input is the companion controller's
//! pulse train, measured by [`frequency::FrequencySampler`].

pub mod frequency;
