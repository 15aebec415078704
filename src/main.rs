use basic_collections::collections::CollectionError;
use basic_collections::collections::contiguous::{Queue, Stack, Vector};
use basic_collections::collections::hash::HashMap;
use basic_collections::collections::heap::{BinaryHeap, HeapKind};

fn main() -> Result<(), CollectionError> {
    println!("\n[HashMap]\n");

    let mut map: HashMap<i32, String> = HashMap::new();
    println!("{:?}", map);

    for i in 0..10 {
        map.insert(i, format!("Value {i}"));
        println!("len: {}, cap: {}", map.len(), map.cap());
    }

    for i in 0..10 {
        println!("{i} => {}", map.try_get(&i)?);
    }
    println!("{:?}", map);

    println!("\n[Vector]\n");

    let mut vec = Vector::<u8>::new();
    println!("{:?}", vec);

    for i in 0..8 {
        vec.try_push(i)?;
        println!("{:?}", vec);
    }

    vec.try_insert(2, 100)?;
    println!("removed {}", vec.try_remove(0)?);
    println!("{}", vec);

    println!("\n[Stack / Queue]\n");

    let mut stack: Stack<_> = (0..5).collect();
    let mut queue: Queue<_> = (0..5).collect();
    println!("popped {}, dequeued {}", stack.try_pop()?, queue.try_dequeue()?);
    println!("{:?}", stack);
    println!("{:?}", queue);

    println!("\n[BinaryHeap]\n");

    let mut heap = BinaryHeap::new(HeapKind::Min);
    heap.extend([5, 3, 8, 1, 9, 2]);
    println!("{:?}", heap);
    println!("root {}, height {}", heap.try_peek()?, heap.height());
    println!("{}", heap.into_sorted_vector());

    Ok(())
}
