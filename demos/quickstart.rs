use chrono::{Local, Utc};
use civilstamp::{from_timestamp, from_timestamp_in, to_timestamp, to_timestamp_in, zone, Precision};

fn main() {
    let now = Local::now().naive_local();
    let helsinki = zone("Europe/Helsinki").expect("bundled IANA zone");

    for precision in Precision::ALL {
        let ts = to_timestamp(&now, precision);
        println!("{precision:>12}: {ts}");
        println!("{:>12}  local    {}", "", from_timestamp(ts, precision));
        println!("{:>12}  UTC      {}", "", from_timestamp_in(ts, precision, &Utc));
        println!("{:>12}  Helsinki {}", "", from_timestamp_in(ts, precision, &helsinki));
    }

    let configured = Precision::from_name("MicroSecond");
    let wall = from_timestamp_in(946_688_461_118_123, configured, &helsinki);
    let millis = to_timestamp_in(&wall, Precision::Millisecond, &helsinki);
    println!("{wall} in Helsinki is {millis} ms");
}
