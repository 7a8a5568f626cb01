use pullstream::pipe::{self, Sequence};
use pullstream::PipeExt;

#[test]
fn test_pipe_map() {
    let seq = Sequence::from_values(vec![1, 2, 3, 4, 5]);
    let pipe = pipe::map(|x: i32| x * 2);

    let result = pipe.apply(seq).collect_values().unwrap();
    assert_eq!(result, vec![2, 4, 6, 8, 10]);
}

#[test]
fn test_pipe_filter() {
    let seq = Sequence::from_values(vec![1, 2, 3, 4, 5]);
    let pipe = pipe::filter(|x: &i32| x % 2 == 0);

    let result = pipe.apply(seq).collect_values().unwrap();
    assert_eq!(result, vec![2, 4]);
}

#[test]
fn test_pipe_compose() {
    let seq = Sequence::from_values(vec![1, 2, 3, 4, 5]);

    // Create pipes
    let double = pipe::map(|x: i32| x * 2);
    let even_only = pipe::filter(|x: &i32| x % 2 == 0);

    // Compose pipes: first double, then filter for even numbers
    let pipe = pipe::compose(double, even_only);

    let result = pipe.apply(seq).collect_values().unwrap();
    // After doubling, all numbers are even, so all should pass the filter
    assert_eq!(result, vec![2, 4, 6, 8, 10]);
}

#[test]
fn test_pipe_identity() {
    let seq = Sequence::from_values(vec![1, 2, 3, 4, 5]);
    let pipe = pipe::identity();

    let result = pipe.apply(seq).collect_values().unwrap();
    assert_eq!(result, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_pipe_ext_compose() {
    let seq = Sequence::from_values(vec![1, 2, 3, 4, 5]);

    let double = pipe::map(|x: i32| x * 2);
    let to_string = pipe::map(|x: i32| x.to_string());

    // Use PipeExt to compose
    let pipe = double.compose(to_string);

    let result = pipe.apply(seq).collect_values().unwrap();
    assert_eq!(
        result,
        vec![
            "2".to_string(),
            "4".to_string(),
            "6".to_string(),
            "8".to_string(),
            "10".to_string()
        ]
    );
}

#[test]
fn test_pipe_is_reusable() {
    let double = pipe::map(|x: i32| x * 2);

    let first = double
        .apply(Sequence::from_values(vec![1, 2]))
        .collect_values()
        .unwrap();
    let second = double
        .apply(Sequence::from_values(vec![3, 4]))
        .collect_values()
        .unwrap();

    assert_eq!(first, vec![2, 4]);
    assert_eq!(second, vec![6, 8]);
}

#[test]
fn test_sequence_shr_operator() {
    let seq = Sequence::from_values(vec![1, 2, 3]);
    let result = (seq >> pipe::map(|x: i32| x + 10)).collect_values().unwrap();
    assert_eq!(result, vec![11, 12, 13]);
}

#[test]
fn test_sequence_is_lazy() {
    use std::cell::Cell;
    use std::rc::Rc;

    let pulled = Rc::new(Cell::new(0));
    let counter = Rc::clone(&pulled);
    let seq = Sequence::new((0..100).map(move |x| {
        counter.set(counter.get() + 1);
        Ok(x)
    }));

    let mut piped = pipe::map(|x: i32| x * 2).apply(seq);

    // Nothing runs until an element is requested.
    assert_eq!(pulled.get(), 0);
    assert_eq!(piped.next().unwrap().unwrap(), 0);
    assert_eq!(piped.next().unwrap().unwrap(), 2);
    assert_eq!(pulled.get(), 2);
}
