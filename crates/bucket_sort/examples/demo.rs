use bucket_sort::bucket_sort;

fn main() {
    let cases: [Vec<f64>; 7] = [
        vec![],
        vec![1.0],
        vec![2.5, 1.2],
        vec![5.0, 3.3, 8.8, 4.4, 2.2],
        vec![10.0, 7.7, 8.8, 9.9, 1.1, 5.5],
        vec![3.3, 3.3, 3.3],
        vec![0.0, -1.1, 5.5, -10.5, 8.8],
    ];

    for case in cases {
        let mut sorted = case.clone();
        bucket_sort(&mut sorted);
        println!("original: {case:?}");
        println!("sorted:   {sorted:?}");
        println!("{}", "-".repeat(40));
    }
}
