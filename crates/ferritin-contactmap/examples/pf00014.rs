use ferritin_contactmap::{render_contact_map, ContactPair};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let other_contacts = vec![ContactPair(0, 37), ContactPair(4, 23), ContactPair(16, 45)];
    let true_positives = vec![ContactPair(4, 54), ContactPair(13, 37), ContactPair(29, 50)];
    let false_positives = vec![ContactPair(2, 20), ContactPair(8, 8)];

    let map = render_contact_map(other_contacts, true_positives, false_positives);
    map.save("pf00014.svg")?;
    println!("SVG has been created as 'pf00014.svg'");
    Ok(())
}
