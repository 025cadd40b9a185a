//! Walks the container through the classic greeting: construction, case
//! conversion, substring extraction, and search.

use unitstr::UnitString;

fn main() {
    let mut greeting = UnitString::<char>::from("Hello World!");
    println!("{greeting} ({} units, capacity {})", greeting.len(), greeting.capacity());

    let who = greeting.substring(6..);
    println!("substring(6..) = {who}");
    println!("index_of('W')  = {:?}", greeting.index_of('W'));

    greeting.make_upper();
    println!("upper-cased    = {greeting}");

    greeting.append_filled('!', 2);
    println!("appended       = {greeting} (capacity {})", greeting.capacity());
}
