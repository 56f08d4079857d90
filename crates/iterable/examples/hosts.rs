use std::ops::Index;

use iterable::{Delegate, Indexed, Iterable, RandomAccess, Storage, Synthesize};

/// Accessor-based host: an index operation plus a length.
struct Readings {
    values: [u32; 5],
}

impl Index<usize> for Readings {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.values[index]
    }
}

impl Indexed for Readings {
    fn len(&self) -> usize {
        self.values.len()
    }
}

impl Iterable for Readings {
    type Strategy = Synthesize;
}

/// Storage-based host: iteration is forwarded to the inner vec.
struct Samples {
    data: Vec<i64>,
}

impl Storage for Samples {
    type Target = Vec<i64>;

    fn storage(&self) -> &Vec<i64> {
        &self.data
    }
}

impl Iterable for Samples {
    type Strategy = Delegate;
}

fn main() {
    let readings = Readings {
        values: [10, 20, 30, 40, 50],
    };

    let collected: Vec<u32> = readings.elements().copied().collect();
    assert_eq!(collected, [10, 20, 30, 40, 50]);

    let third = readings.begin() + 3;
    assert_eq!(*third.current(), 40);
    assert_eq!(third - readings.begin(), 3);
    assert_eq!(readings.end() - readings.begin(), 5);

    let mut cursor = readings.begin();
    let previous = cursor.post_increment();
    assert_eq!(previous.position(), 0);
    assert_eq!(cursor[1], 30);

    let samples = Samples {
        data: vec![1, 2, 3],
    };

    assert!(samples.begin() == samples.data.begin());
    assert!(samples.end() == samples.data.end());
    assert_eq!(samples.elements().sum::<i64>(), 6);
}
