use defer_chain::{chain_value, ActionArg, Chain, ChainValueExt};

#[test]
fn chain_value_boxes_into_the_threaded_shape() {
    let value = chain_value([1, 2, 3]);
    assert_eq!(value.downcast_value::<[i32; 3]>(), Some([1, 2, 3]));
}

#[test]
fn ok_result_seeds_the_previous_result() {
    let upstream: Result<i32, &str> = Ok(5);
    let mut chain: Chain<&str> = upstream.into();

    chain.apply(
        |v| Ok(chain_value(v.downcast_value::<i32>().unwrap_or(0) * 2)),
        ActionArg::previous(),
    );

    assert_eq!(
        chain.flush_result().unwrap().downcast_value::<i32>(),
        Some(10)
    );
}

#[test]
fn err_result_seeds_a_synthetic_starting_error() {
    let upstream: Result<i32, &str> = Err("upstream failed");
    let mut chain: Chain<&str> = upstream.into();

    let mut calls = 0;
    chain.apply(
        |_| {
            calls += 1;
            Ok(None)
        },
        ActionArg::previous(),
    );

    assert_eq!(calls, 0);
    assert_eq!(chain.flush_result().unwrap_err(), "upstream failed");
}
