use uptri::data::linear_algebra::{LinearAlgebraError, MAX_VECTOR_SIZE, Sequence};

use crate::init_logging;

#[test]
fn can_create_with_positive_length() {
    init_logging();

    assert!(Sequence::<i32>::zeros(5).is_ok());
}

#[test]
fn size_limit_is_inclusive() {
    init_logging();

    let v = Sequence::<u8>::zeros(MAX_VECTOR_SIZE).unwrap();
    assert_eq!(v.size(), MAX_VECTOR_SIZE);
    assert!(matches!(
        Sequence::<u8>::zeros(MAX_VECTOR_SIZE + 1),
        Err(LinearAlgebraError::InvalidSize { .. }),
    ));
}

#[test]
fn cant_create_with_negative_length() {
    assert!(matches!(
        Sequence::<i32>::zeros(-5),
        Err(LinearAlgebraError::InvalidSize { requested: -5, .. }),
    ));
}

#[test]
fn cant_create_with_invalid_start_index() {
    assert!(matches!(
        Sequence::<i32>::new(5, -2),
        Err(LinearAlgebraError::InvalidStartIndex { .. }),
    ));
    assert!(matches!(
        Sequence::<i32>::new(5, 5),
        Err(LinearAlgebraError::InvalidStartIndex { .. }),
    ));
    assert!(matches!(
        Sequence::<i32>::new(5, 6),
        Err(LinearAlgebraError::InvalidStartIndex { .. }),
    ));
}

#[test]
fn get_size_and_start_index() {
    for size in 1..6_usize {
        for start_index in 0..size {
            let v = Sequence::<i64>::new(size, start_index).unwrap();
            assert_eq!(v.size(), size);
            assert_eq!(v.start_index(), start_index);
        }
    }
}

#[test]
fn copied_is_equal_with_own_memory() {
    let mut v = Sequence::<i32>::zeros(10).unwrap();
    let copy = v.clone();
    assert_eq!(v, copy);
    assert!(!std::ptr::eq(&v[0], &copy[0]));

    v[3] = 4;
    assert_eq!(copy[3], 0);
}

#[test]
fn set_and_get_element() {
    let mut v = Sequence::<i32>::zeros(4).unwrap();
    v[0] = 4;
    assert_eq!(v[0], 4);
    assert_eq!(v.get(0), Ok(&4));
}

#[test]
fn set_element_out_of_range() {
    init_logging();

    let mut v = Sequence::<u8>::zeros(10).unwrap();
    assert!(matches!(
        v.get_mut(-3),
        Err(LinearAlgebraError::IndexOutOfRange { requested: -3, .. }),
    ));
    assert!(matches!(
        v.get_mut(10),
        Err(LinearAlgebraError::IndexOutOfRange { requested: 10, .. }),
    ));
    assert!(v.get_mut(11).is_err());
}

#[test]
fn assign() {
    let mut v = Sequence::<u8>::zeros(10).unwrap();
    let same = v.clone();
    v.clone_from(&same);
    assert_eq!(v, same);

    let equal_size = Sequence::try_from(vec![1_u8; 10]).unwrap();
    v.clone_from(&equal_size);
    assert_eq!(v, equal_size);

    let smaller = Sequence::<u8>::zeros(3).unwrap();
    v.clone_from(&smaller);
    assert_eq!(v.size(), 3);
    assert_eq!(v, smaller);
}

#[test]
fn compare() {
    let mut v = Sequence::<u8>::zeros(10).unwrap();
    let mut w = Sequence::<u8>::zeros(10).unwrap();
    for i in 0..10 {
        v[i] = i as u8;
        w[i] = i as u8;
    }
    assert!(v == w);
    assert!(v == v);

    let mut short = Sequence::<u8>::zeros(4).unwrap();
    for i in 0..4 {
        short[i] = i as u8;
    }
    assert!(v != short);
}

#[test]
fn scalar_operations() {
    let v = Sequence::<f32>::zeros(5).unwrap();
    assert_eq!((&v + 5.0).as_slice(), &[5.0; 5]);
    assert_eq!((&v - 5.0).as_slice(), &[-5.0; 5]);
    assert_eq!((&v * 5.0).as_slice(), &[0.0; 5]);

    let v = Sequence::from_values(1, vec![1.5_f32, 2.0]).unwrap();
    assert_eq!(v * 2.0, Sequence::from_values(1, vec![3.0, 4.0]).unwrap());
}

#[test]
fn vector_operations() {
    init_logging();

    let v = Sequence::<f32>::zeros(5).unwrap();
    let w = Sequence::<f32>::zeros(5).unwrap();
    let long = Sequence::<f32>::zeros(8).unwrap();

    assert!(v.checked_add(&w).is_ok());
    assert!(v.checked_sub(&w).is_ok());
    assert!(v.dot(&w).is_ok());

    assert!(matches!(v.checked_add(&long), Err(LinearAlgebraError::SizeMismatch { .. })));
    assert!(matches!(v.checked_sub(&long), Err(LinearAlgebraError::SizeMismatch { .. })));
    assert!(matches!(v.dot(&long), Err(LinearAlgebraError::SizeMismatch { .. })));
}
