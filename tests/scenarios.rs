use dynarray::{DynArray, DynArrayError};

fn filled_4_5_6() -> DynArray<i32, 3> {
    let mut arr: DynArray<i32, 3> = DynArray::new([4, 5, 6]);
    for i in 0..4 {
        for j in 0..5 {
            for k in 0..6 {
                arr.at_mut(i).at_mut(j)[k] = (i * 30 + j * 6 + k + 1) as i32;
            }
        }
    }
    arr
}

#[test]
fn test_chained_index_4_5_6() {
    let arr = filled_4_5_6();
    assert_eq!(arr.size(0), 4);
    assert_eq!(arr.total_size(), 120);
    assert_eq!(arr.at(0).at(1)[2], 9);
    assert_eq!(arr.at(1).at(3)[5], 54);
    assert_eq!(arr[[1, 3, 5]], 54);
}

#[test]
fn test_products_survive_copy_and_move() {
    let mut arr: DynArray<i32, 3> = DynArray::new([4, 5, 6]);
    for (i, mut plane) in arr.iter_mut().enumerate() {
        for (j, mut row) in plane.iter_mut().enumerate() {
            for (k, x) in row.iter_mut().enumerate() {
                *x = ((i + 1) * (j + 1) * (k + 1)) as i32;
            }
        }
    }
    assert_eq!(arr.at(0).at(1)[2], 6);
    assert_eq!(arr.at(1).at(3)[5], 48);

    let arr2 = arr.clone();
    assert_eq!(arr2.at(0).at(1)[2], 6);
    assert_eq!(arr2.at(1).at(3)[5], 48);

    let arr3 = arr2;
    assert_eq!(arr3.at(0).at(1)[2], 6);
    assert_eq!(arr3.at(1).at(3)[5], 48);
}

#[test]
fn test_front_back_1d() {
    let mut arr: DynArray<i32, 1> = DynArray::new([5]);
    arr[0] = 42;
    arr[4] = 24;
    assert_eq!(*arr.front(), 42);
    assert_eq!(*arr.back(), 24);
    *arr.back_mut() += 1;
    assert_eq!(arr.view()[4], 25);
    arr[3] = 1;
    assert_eq!(arr[3], 1);
}

#[test]
fn test_sub_view_total_size() {
    let arr: DynArray<u8, 3> = DynArray::new([2, 4, 6]);
    assert_eq!(arr.at(1).total_size(), 24);
    assert_eq!(arr.at(1).at(2).total_size(), 6);
    assert_eq!(arr.at(1).size(0), 4);
    assert_eq!(arr.at(1).at(2).size(0), 6);
}

#[test]
fn test_view_matches_chain() {
    let arr = filled_4_5_6();
    let v = arr.view();
    for i in 0..4 {
        for j in 0..5 {
            for k in 0..6 {
                assert_eq!(v.at(i).at(j)[k], arr[[i, j, k]]);
                assert_eq!(v[[i, j, k]], arr[[i, j, k]]);
            }
        }
    }
}

#[test]
fn test_higher_rank() {
    let arr = DynArray::from_fn([2, 2, 2, 2, 3], |[a, b, c, d, e]| a + b + c + d + e);
    assert_eq!(arr.total_size(), 48);
    assert_eq!(arr.remain(), &[24, 12, 6, 3, 1]);
    assert_eq!(arr.at(1).at(1).at(1).at(1)[2], 6);
    assert_eq!(arr.back().back().back().back().as_slice(), [4, 5, 6]);
}

#[test]
fn test_uninit_then_assume_init() {
    let mut arr = DynArray::<String, 2>::uninit([2, 2]).unwrap();
    for (index, slot) in arr.flat_mut().enumerate() {
        slot.write(index.to_string());
    }
    let arr = unsafe { arr.assume_init() };
    assert_eq!(arr[[1, 0]], "2");
    assert_eq!(arr.at(1).back(), "3");
}

#[test]
fn test_construction_errors() {
    assert_eq!(
        DynArray::<i32, 3>::try_new([4, 0, 6]).unwrap_err(),
        DynArrayError::ZeroExtent {dim: 1},
    );
    assert_eq!(
        DynArray::<i32, 2>::try_new([4i64, -6]).unwrap_err(),
        DynArrayError::ExtentOutOfRange {dim: 1},
    );
    assert_eq!(
        DynArray::<i32, 2>::try_new([4i64, -6]).unwrap_err().to_string(),
        "extent of dimension 1 is not representable as usize",
    );
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_chain_out_of_bounds() {
    let arr = filled_4_5_6();
    let _ = arr.at(3).at(5);
}
