use crate::cards::CardType;

/// One frequency bucket: a card-type label and how many cards of that type
/// were drawn into hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    card_type: CardType,
    count: u32,
}

impl Bucket {
    pub fn card_type(self) -> CardType {
        self.card_type
    }

    pub fn count(self) -> u32 {
        self.count
    }
}

/// Per-type frequency table over the 14 card types.
///
/// The 14 buckets are created once, in canonical type order, and are only
/// ever incremented and (at game end) reordered. A card counts exactly once,
/// when it is drawn from the supply into a hand; cards promoted to the top
/// of the pile are not re-counted.
///
/// ```
/// use taki_rs::cards::CardType;
/// use taki_rs::stats::Statistics;
///
/// let mut stats = Statistics::new();
/// stats.record(CardType::Taki);
/// stats.record(CardType::Taki);
/// stats.record(CardType::Five);
/// assert_eq!(stats.total(), 3);
///
/// stats.sort();
/// assert_eq!(stats.buckets()[0].card_type(), CardType::Taki);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    buckets: [Bucket; 14],
}

impl Statistics {
    pub fn new() -> Self {
        Self { buckets: CardType::ALL.map(|card_type| Bucket { card_type, count: 0 }) }
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Count one freshly drawn card of the given type.
    pub fn record(&mut self, card_type: CardType) {
        self.buckets[card_type.index()].count += 1;
    }

    /// Sum of all bucket counts.
    pub fn total(&self) -> u32 {
        self.buckets.iter().map(|b| b.count).sum()
    }

    /// Current count for a type, regardless of bucket order.
    pub fn count_of(&self, card_type: CardType) -> u32 {
        self.buckets
            .iter()
            .find(|b| b.card_type == card_type)
            .map(|b| b.count)
            .unwrap_or(0)
    }

    /// Reorder the buckets by descending count.
    ///
    /// Merge sort; the merge takes from the left run on equal counts, so
    /// equal-count buckets keep their relative (canonical) order.
    pub fn sort(&mut self) {
        merge_sort(&mut self.buckets);
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

fn merge_sort(data: &mut [Bucket]) {
    if data.len() <= 1 {
        return;
    }
    let mid = data.len() / 2;
    merge_sort(&mut data[..mid]);
    merge_sort(&mut data[mid..]);

    let mut merged = Vec::with_capacity(data.len());
    {
        let (left, right) = data.split_at(mid);
        let (mut i, mut j) = (0, 0);
        while i < left.len() && j < right.len() {
            // >= keeps the sort stable: ties take from the left run.
            if left[i].count >= right[j].count {
                merged.push(left[i]);
                i += 1;
            } else {
                merged.push(right[j]);
                j += 1;
            }
        }
        merged.extend_from_slice(&left[i..]);
        merged.extend_from_slice(&right[j..]);
    }
    data.copy_from_slice(&merged);
}
