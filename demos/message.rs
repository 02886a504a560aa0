use lockfree_queue::{traits::*, HeapQueue};
use std::{thread, time::Duration};

fn main() {
    let buf = HeapQueue::<u8>::new(10);
    let (mut prod, mut cons) = buf.split();

    let smsg = "The quick brown fox jumps over the lazy dog";

    let pjh = thread::spawn(move || {
        println!("-> sending message: '{}'", smsg);

        let mut bytes = smsg.bytes().chain([0]);
        loop {
            if prod.is_full() {
                println!("-> buffer is full, waiting");
                thread::sleep(Duration::from_millis(1));
            } else {
                match prod.push_iter(&mut bytes) {
                    0 => break,
                    n => println!("-> {} bytes sent", n),
                }
            }
        }

        println!("-> message sent");
    });

    let cjh = thread::spawn(move || {
        println!("<- receiving message");

        let mut bytes = Vec::<u8>::new();
        loop {
            match cons.pop_wait_timeout(Duration::from_millis(1)) {
                Some(0) => break,
                Some(b) => bytes.push(b),
                None => println!("<- buffer is empty, waiting"),
            }
        }

        let msg = String::from_utf8(bytes).unwrap();
        println!("<- message received: '{}'", msg);

        msg
    });

    pjh.join().unwrap();
    let rmsg = cjh.join().unwrap();

    assert_eq!(smsg, rmsg);
}
