use solid_core::adapters::outbound::messaging::{EmailService, SmsService};
use solid_core::adapters::outbound::office::{InkjetPrinter, MultiFunctionPrinter};
use solid_core::adapters::outbound::terminal::InvoicePrinter;
use solid_core::application::services::notification::Notification;
use solid_core::domain::models::bird::{Bird, Penguin, Sparrow};
use solid_core::domain::models::invoice::Invoice;
use solid_core::domain::models::principle::Principle;
use solid_core::domain::models::shape::{Circle, Rectangle, Shape};
use solid_core::ports::outbound::device::{DocumentPrinter, DocumentScanner};
use solid_core::ports::outbound::notifier::Notifier;

/// One pass over everything: price an invoice, measure two shapes, fly
/// the flock, drive the office, notify twice.
#[test]
fn full_walkthrough_in_catalog_order() {
    assert_eq!(Principle::ALL.len(), 5);

    let invoice = Invoice::new(100.0);
    assert_eq!(InvoicePrinter.render(&invoice), "Invoice total: 110.00");

    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Rectangle::new(5.0, 10.0)),
        Box::new(Circle::new(7.0)),
    ];
    let areas: Vec<f64> = shapes.iter().map(|shape| shape.area()).collect();
    assert_eq!(areas[0], 50.0);
    assert!((areas[1] - 153.86).abs() < 1e-9);

    let flock: Vec<Box<dyn Bird>> = vec![Box::new(Sparrow), Box::new(Penguin)];
    let failures = flock.iter().filter(|bird| bird.fly().is_err()).count();
    assert_eq!(failures, 1, "exactly one bird breaks the flight promise");

    assert_eq!(MultiFunctionPrinter.print_document(), "Printing document");
    assert_eq!(MultiFunctionPrinter.scan_document(), "Scanning document");

    let email = Notification::new(Box::new(EmailService));
    assert_eq!(
        email.send_notification("Hello via Email!"),
        "Sending email: Hello via Email!"
    );

    let sms = Notification::new(Box::new(SmsService));
    assert_eq!(
        sms.send_notification("Hello via SMS!"),
        "Sending SMS: Hello via SMS!"
    );
}

/// A brand-new shape defined outside the crate slots straight in.
#[test]
fn shapes_are_open_to_outside_extension() {
    struct Triangle {
        base: f64,
        height: f64,
    }

    impl Shape for Triangle {
        fn label(&self) -> &'static str {
            "Triangle"
        }

        fn dimensions(&self) -> Vec<(&'static str, f64)> {
            vec![("base", self.base), ("height", self.height)]
        }

        fn area(&self) -> f64 {
            0.5 * self.base * self.height
        }
    }

    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Rectangle::new(2.0, 3.0)),
        Box::new(Triangle {
            base: 4.0,
            height: 3.0,
        }),
    ];

    assert_eq!(shapes[1].area(), 6.0);
    let labels: Vec<&str> = shapes.iter().map(|shape| shape.label()).collect();
    assert_eq!(labels, ["Rectangle", "Triangle"]);
}

#[test]
fn sparrow_flight_propagates_cleanly() -> anyhow::Result<()> {
    let report = Sparrow.fly()?;
    assert_eq!(report, "Sparrow is flying");
    Ok(())
}

/// The penguin fails no matter how often it is asked, and hiding it behind
/// the trait changes nothing.
#[test]
fn penguin_keeps_failing_behind_the_trait() {
    let bird: Box<dyn Bird> = Box::new(Penguin);
    for _ in 0..3 {
        let err = bird.fly().expect_err("penguins never fly");
        assert_eq!(err.to_string(), "Penguins cannot fly");
    }
}

/// An outside channel wires in without touching Notification.
#[test]
fn notification_accepts_outside_channels() {
    struct Pager;

    impl Notifier for Pager {
        fn channel(&self) -> &'static str {
            "pager"
        }

        fn send(&self, message: &str) -> String {
            format!("Paging: {message}")
        }
    }

    let notification = Notification::new(Box::new(Pager));
    assert_eq!(notification.channel(), "pager");
    assert_eq!(notification.send_notification("X"), "Paging: X");
}

/// A print-only device satisfies the printer contract with no scanner in sight.
#[test]
fn inkjet_needs_no_scanner() {
    fn run_print_job<P: DocumentPrinter>(device: &P) -> String {
        device.print_document()
    }

    assert_eq!(run_print_job(&InkjetPrinter), "Printing document");
}
