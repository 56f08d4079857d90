use std::{
    collections::{BTreeSet, LinkedList, VecDeque},
    ops::{Index, IndexMut},
};

use iterable::{
    Cursor, Delegate, Difference, For, Indexed, Iterable, Range, Result, Storage, StorageMut,
    Synthesize,
};

/// Accessor-based host, no storage member.
struct Readings(Vec<u32>);

impl Index<usize> for Readings {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.0[index]
    }
}

impl IndexMut<usize> for Readings {
    fn index_mut(&mut self, index: usize) -> &mut u32 {
        &mut self.0[index]
    }
}

impl Indexed for Readings {
    fn len(&self) -> usize {
        self.0.len()
    }
}

impl Iterable for Readings {
    type Strategy = Synthesize;
}

/// Host wrapping a storage member.
struct Samples {
    data: Vec<i64>,
}

impl Storage for Samples {
    type Target = Vec<i64>;

    fn storage(&self) -> &Vec<i64> {
        &self.data
    }
}

impl StorageMut for Samples {
    fn storage_mut(&mut self) -> &mut Vec<i64> {
        &mut self.data
    }
}

impl Iterable for Samples {
    type Strategy = Delegate;
}

/// Host delegating to a host that synthesizes its own cursors.
struct Nested {
    readings: Readings,
}

impl Storage for Nested {
    type Target = Readings;

    fn storage(&self) -> &Readings {
        &self.readings
    }
}

impl Iterable for Nested {
    type Strategy = Delegate;
}

/// Host wrapping an ordered set, which has no cursors of its own.
struct Tags {
    set: BTreeSet<&'static str>,
}

impl Storage for Tags {
    type Target = BTreeSet<&'static str>;

    fn storage(&self) -> &BTreeSet<&'static str> {
        &self.set
    }
}

/// Host wrapping a linked list.
struct Journal {
    entries: LinkedList<u32>,
}

impl Storage for Journal {
    type Target = LinkedList<u32>;

    fn storage(&self) -> &LinkedList<u32> {
        &self.entries
    }
}

impl StorageMut for Journal {
    fn storage_mut(&mut self) -> &mut LinkedList<u32> {
        &mut self.entries
    }
}

fn setup_readings() -> Readings {
    Readings(vec![10, 20, 30, 40, 50])
}

fn setup_samples() -> Samples {
    Samples {
        data: vec![1, 2, 3],
    }
}

#[test]
fn test_synthesized_iteration() {
    let readings = setup_readings();

    let mut yielded = vec![];
    for value in readings.elements() {
        yielded.push(*value);
    }
    assert_eq!(yielded, [10, 20, 30, 40, 50]);

    assert_eq!(*(readings.begin() + 3).current(), 40);
    assert_eq!((readings.begin() + 3) - readings.begin(), 3);
    assert_eq!(readings.end() - readings.begin(), 5);
}

#[test]
fn test_synthesized_iteration_visits_every_position_in_order() {
    for len in 0..20_u32 {
        let readings = Readings((0..len).map(|i| i * 7).collect());

        let mut count = 0;
        for (position, value) in readings.elements().enumerate() {
            assert_eq!(*value, position as u32 * 7);
            count += 1;
        }
        assert_eq!(count, len as usize);
        assert_eq!(readings.elements().len(), len as usize);
    }
}

#[test]
fn test_empty_host() {
    let readings = Readings(vec![]);

    assert!(readings.begin() == readings.end());
    assert_eq!(readings.elements().next(), None);
    assert_eq!(readings.elements().count(), 0);
    assert_eq!(readings.elements().last(), None);
}

#[test]
fn test_const_accessors_match() {
    let readings = setup_readings();

    assert_eq!(readings.cbegin(), readings.begin());
    assert_eq!(readings.cend(), readings.end());

    let samples = setup_samples();
    assert_eq!(samples.cbegin(), samples.data.begin());
    assert_eq!(samples.cend(), samples.data.end());
}

#[test]
fn test_delegation_forwards_to_storage() {
    let samples = setup_samples();

    assert_eq!(samples.begin(), samples.data.begin());
    assert_eq!(samples.end(), samples.data.end());
    assert!(samples.begin().same_host(&samples.data.begin()));
    assert!(std::ptr::eq(samples.begin().host(), &samples.data));

    assert!(samples.elements().eq(samples.data.elements()));
    assert_eq!(samples.elements().copied().collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn test_delegation_to_synthesizing_storage() {
    let nested = Nested {
        readings: setup_readings(),
    };

    let begin: Cursor<'_, Readings> = nested.begin();
    assert!(begin.same_host(&nested.readings.begin()));
    assert_eq!(nested.end() - begin, 5);
    assert_eq!(nested.elements().rev().next(), Some(&50));
}

#[test]
fn test_double_ended_iteration() {
    let readings = setup_readings();

    let mut elements = readings.elements();
    assert_eq!(elements.next(), Some(&10));
    assert_eq!(elements.next_back(), Some(&50));
    assert_eq!(elements.len(), 3);
    assert_eq!(elements.nth(1), Some(&30));
    assert_eq!(elements.next_back(), Some(&40));
    assert_eq!(elements.next(), None);
    assert_eq!(elements.next_back(), None);

    let mut elements = readings.elements();
    assert_eq!(elements.nth_back(1), Some(&40));
    assert_eq!(elements.nth(5), None);
    assert_eq!(elements.next(), None);

    assert_eq!(
        readings.elements().rev().copied().collect::<Vec<_>>(),
        [50, 40, 30, 20, 10]
    );
}

#[test]
fn test_range_tracks_its_bounds() {
    let readings = setup_readings();

    let mut elements = readings.elements();
    elements.next();
    elements.next_back();
    assert_eq!(elements.begin(), readings.begin() + 1);
    assert_eq!(elements.end(), readings.end() - 1);
}

#[test]
fn test_inconsistent_range_is_empty() {
    let readings = setup_readings();

    let mut range = Range::new(readings.end(), readings.begin());
    assert_eq!(range.len(), 0);
    assert_eq!(range.next(), None);
    assert_eq!(range.begin(), range.end());
}

#[test]
fn test_sub_range() {
    let readings = setup_readings();

    let range = Range::new(readings.begin() + 1, readings.begin() + 4);
    assert_eq!(range.copied().collect::<Vec<_>>(), [20, 30, 40]);
}

#[test]
fn test_wrapper() {
    let readings = setup_readings();

    let wrapped = For::<_, Synthesize>::new(&readings);
    assert_eq!(wrapped.begin(), readings.begin());
    assert_eq!(wrapped.end(), readings.end());
    assert_eq!(wrapped.cend() - wrapped.cbegin(), 5);
    assert!(std::ptr::eq(wrapped.host(), &readings));

    let mut sum = 0;
    for value in &wrapped {
        sum += value;
    }
    assert_eq!(sum, 150);

    let samples = setup_samples();
    assert_eq!(samples.iterable().begin(), samples.data.begin());
    assert_eq!(samples.iterable().into_iter().count(), 3);
}

#[test]
fn test_ring_buffer_host() {
    let mut deque = VecDeque::with_capacity(4);
    deque.push_back(3);
    deque.push_back(4);
    deque.push_front(2);
    deque.push_front(1);

    assert_eq!(Iterable::elements(&deque).copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
    assert_eq!(*(deque.begin() + 2).current(), 3);
    assert_eq!(deque.end().category(), iterable::Tag::Ordinary);
}

#[test]
fn test_mutable_synthesized_cursor() -> Result<()> {
    let mut readings = setup_readings();

    let mut cursor = readings.begin_mut();
    while cursor.get().is_some() {
        *cursor.current_mut() += 1;
        cursor.increment();
    }
    assert!(cursor.try_current_mut().is_err());

    assert_eq!(readings.0, [11, 21, 31, 41, 51]);

    let mut cursor = readings.end_mut();
    cursor.decrement();
    *cursor.try_current_mut()? = 0;
    cursor[-4] = 100;
    assert_eq!(cursor[-1], 41);
    assert_eq!(readings.0, [100, 21, 31, 41, 0]);

    let mut first = setup_readings();
    let mut second = setup_readings();
    let front = first.begin_mut();
    let back = second.end_mut();
    assert!(front < back);
    assert_eq!(front.distance_to(&back), 5);
    assert_eq!(&back - &front, 5);

    let step: Difference = 2;
    let moved = step + front;
    assert_eq!(*moved.current(), 30);
    assert_eq!(moved.distance_to(&back), 3);
    assert!(moved <= back && back > moved);
    assert_eq!(moved.cmp(&back), std::cmp::Ordering::Less);

    Ok(())
}

#[test]
fn test_mutable_delegated_cursor() {
    let mut samples = setup_samples();

    let mut cursor = samples.begin_mut() + 1;
    cursor[0] = 20;
    cursor += 1;
    *cursor.current_mut() *= 10;
    assert_eq!(cursor.as_cursor().position(), 2);
    assert_eq!(cursor.as_cursor().get(), Some(&30));

    let last = samples.end_mut() - 1;
    *last.into_current_mut() += 1;

    assert_eq!(samples.data, [1, 20, 31]);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_mutable_dereference_past_end_panics() {
    let mut readings = setup_readings();
    let mut cursor = readings.end_mut();
    *cursor.current_mut() = 0;
}

#[test]
fn test_ordered_set_storage_forwards_its_iterator() {
    let tags = Tags {
        set: BTreeSet::from(["gamma", "alpha", "beta"]),
    };

    assert_eq!(
        tags.storage_iter().copied().collect::<Vec<_>>(),
        ["alpha", "beta", "gamma"]
    );
    assert!(tags.storage_iter().eq(tags.set.iter()));
    assert_eq!(tags.storage_iter().next_back(), Some(&"gamma"));
}

#[test]
fn test_linked_list_storage_forwards_mutable_iterator() {
    let mut journal = Journal {
        entries: LinkedList::from([1, 2, 3]),
    };

    for entry in journal.storage_iter_mut() {
        *entry *= 10;
    }

    assert_eq!(journal.storage_iter().sum::<u32>(), 60);
    assert_eq!(journal.entries, LinkedList::from([10, 20, 30]));
}
