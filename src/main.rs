use int_long_map::int_long_map::IntLongMap;
use std::time::Instant;

fn main() {

    const SAMPLE_SIZE: usize = 1000000;
    const FILL_SIZE: usize = 10000;

    let samples: Vec<i32> = (0..SAMPLE_SIZE).map(|_| rand::random::<i32>()).collect();

    let mut h: IntLongMap = IntLongMap::new();

    let now: Instant = Instant::now();
    for &key in samples.iter() {
        h.put(key, key as i64);
    }
    let elapsed: usize = now.elapsed().as_nanos() as usize;

    println!("Default capacity {} actual capacity {}", IntLongMap::DEFAULT_CAPACITY, h.capacity());
    println!("Sampled keys {} distinct entries {}", SAMPLE_SIZE, h.size());
    println!("Load factor {}", h.load_factor());
    println!("Avg time to put {}", elapsed as f64 / SAMPLE_SIZE as f64);

    let now: Instant = Instant::now();
    for &key in samples.iter() {
        match h.get(key) {
            Some(_) => (),
            None => panic!("Failed to get key {}", key),
        }
    }
    let elapsed: usize = now.elapsed().as_nanos() as usize;

    println!("Avg time to get {}", elapsed as f64 / SAMPLE_SIZE as f64);

    // a sequential fill pays for every rehash from the default capacity up
    benchmarking::warm_up();
    let result = benchmarking::measure_function(|measurer| {
        measurer.measure(|| {
            let mut m: IntLongMap = IntLongMap::new();
            for key in 0..FILL_SIZE as i32 {
                m.put(key, key as i64);
            }
            m
        });
    });

    match result {
        Ok(r) => println!("Time to fill {} sequential keys {:?}", FILL_SIZE, r.elapsed()),
        Err(e) => eprintln!("Sequential fill benchmark failed: {:?}", e),
    }

}
