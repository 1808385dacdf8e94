fn foo(a: i64, b: &str, c: i64) {
    let x = (|e: i64| { e * 2 })(7);
    let y = (|x: i64| x * x)(2);
    println!("{} {}", x, y);
}
fn main() {
    foo(8, "wut", 3);
}
