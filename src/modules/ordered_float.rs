use std::cmp::Ordering;

#[derive(PartialEq, PartialOrd, Debug, Clone, Copy)]
pub struct OrderedFloat(f64);

/**
 * DS to represent order in floats. Excludes NaNs
 */
impl OrderedFloat {
    pub fn new(val: f64) -> Option<OrderedFloat> {
        if val.is_nan() {
            None
        } else {
            Some(OrderedFloat(val))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Eq for OrderedFloat {}

impl Ord for OrderedFloat {
    fn cmp(&self, other: &OrderedFloat) -> Ordering {
        // NaN is rejected at construction
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}
