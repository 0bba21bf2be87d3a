use radix_sort::{radix_sort, radix_sort_decimal};

fn main() {
    let cases: [Vec<i64>; 5] = [
        vec![170, 45, 75, -90, -802, 24, 2, 66],
        vec![],
        vec![42],
        vec![5, -3, 0],
        vec![3, 3, -3, -3, 0, 0],
    ];

    for case in cases {
        let mut sorted = case.clone();
        radix_sort_decimal(&mut sorted);
        println!("original: {case:?}");
        println!("sorted:   {sorted:?}");
        println!("{}", "-".repeat(40));
    }

    let mut binary = vec![5, -3, 0];
    radix_sort(&mut binary, 2).expect("base 2 is valid");
    println!("base 2:   {binary:?}");

    let rejected = radix_sort(&mut vec![1, 2, 3], 1);
    println!("base 1:   {rejected:?}");
}
