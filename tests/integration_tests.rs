//! Integration Tests for Clinic Billing Core
//!
//! These tests verify cross-domain workflows and end-to-end scenarios
//! that involve multiple crates working together.

use chrono::{Duration, Utc};
use core_kernel::{Money, VisitId};

use domain_billing::{BillLedger, BillStatus, BillingError, Payment, PaymentMethod};
use domain_catalog::{CatalogError, CptCodeCatalog, CptCodeDraft};

mod visit_to_bill_workflow {
    use super::*;

    /// Tests the full path from catalog setup to a settled bill
    #[test]
    fn test_complete_billing_workflow() {
        // 1. Set up the catalog of billable services
        let mut catalog = CptCodeCatalog::new();
        catalog
            .add(CptCodeDraft::new(99202, "Outpatient visit, 15-29 min", 7500).with_time_range(15, 29))
            .expect("Failed to add office visit code");
        catalog
            .add(CptCodeDraft::new(99215, "Outpatient visit, established patient", 25000))
            .expect("Failed to add extended visit code");

        // 2. The encounter closes; resolve its attached codes
        let visit = VisitId::new();
        let visit_date = Utc::now() - Duration::days(1);
        let attached = vec![
            catalog.find_active(99202).expect("code 99202 active").clone(),
            catalog.find_active(99215).expect("code 99215 active").clone(),
        ];

        // 3. Create the bill with the snapshotted total
        let mut ledger = BillLedger::new();
        let bill_id = ledger
            .create_bill(visit, visit_date, &attached)
            .expect("Failed to create bill");

        let bill = ledger.get(&bill_id).expect("bill exists");
        assert_eq!(bill.total_due(), Money::from_minor(32500));
        assert!(!bill.is_paid());

        // 4. Settle the bill in installments
        for amount in [10000, 10000, 5000, 7500] {
            let payment = Payment::new(Money::from_minor(amount), Utc::now(), PaymentMethod::Cash)
                .expect("Failed to build payment");
            ledger
                .add_payment(bill_id, payment)
                .expect("Failed to apply payment");
        }

        // Verify final state
        let bill = ledger.get(&bill_id).expect("bill exists");
        assert!(bill.is_paid());
        assert_eq!(bill.payments().len(), 4);
        assert_eq!(ledger.balance(bill_id).unwrap(), Money::ZERO);
        assert_eq!(
            ledger.status(bill_id, Utc::now()).unwrap(),
            BillStatus::Paid
        );

        // A settled bill takes no further money
        let extra = Payment::new(Money::from_minor(1), Utc::now(), PaymentMethod::Check).unwrap();
        assert!(matches!(
            ledger.add_payment(bill_id, extra),
            Err(BillingError::Overpay { .. })
        ));
    }

    /// Tests that catalog edits after billing never reach the bill
    #[test]
    fn test_bill_total_survives_catalog_repricing_and_archival() {
        let mut catalog = CptCodeCatalog::new();
        catalog
            .add(CptCodeDraft::new(99202, "Outpatient visit", 7500))
            .unwrap();

        let attached = vec![catalog.find_active(99202).unwrap().clone()];

        let mut ledger = BillLedger::new();
        let bill_id = ledger
            .create_bill(VisitId::new(), Utc::now(), &attached)
            .unwrap();

        // Reprice and retire the code after the bill exists
        catalog
            .revise(99202, CptCodeDraft::new(99202, "Outpatient visit", 9900))
            .unwrap();
        catalog.archive(99202).unwrap();

        // The bill still carries the cost snapshotted at creation
        let bill = ledger.get(&bill_id).unwrap();
        assert_eq!(bill.total_due(), Money::from_minor(7500));
    }

    /// Tests that an encounter with no billable services yields a valid bill
    #[test]
    fn test_visit_with_no_attached_codes_bills_at_zero() {
        let mut ledger = BillLedger::new();
        let visit = VisitId::new();
        let bill_id = ledger.create_bill(visit, Utc::now(), &[]).unwrap();

        let bill = ledger.get(&bill_id).unwrap();
        assert_eq!(bill.total_due(), Money::ZERO);
        assert!(!bill.is_paid());
        assert_eq!(ledger.balance(bill_id).unwrap(), Money::ZERO);
    }

    /// Tests the one-bill-per-visit rule across repeated creation calls
    #[test]
    fn test_rebilling_a_visit_returns_the_original_bill() {
        let mut catalog = CptCodeCatalog::new();
        catalog
            .add(CptCodeDraft::new(99202, "Outpatient visit", 7500))
            .unwrap();
        let attached = vec![catalog.find_active(99202).unwrap().clone()];

        let mut ledger = BillLedger::new();
        let visit = VisitId::new();

        let first = ledger.create_bill(visit, Utc::now(), &attached).unwrap();
        let second = ledger.create_bill(visit, Utc::now(), &[]).unwrap();

        assert_eq!(first, second);
        assert_eq!(ledger.len(), 1);
        assert_eq!(
            ledger.find_bill_by_visit(&visit).unwrap().total_due(),
            Money::from_minor(7500)
        );
    }
}

mod delinquency_scenarios {
    use super::*;

    /// Tests the 60-day delinquency window around its boundary
    #[test]
    fn test_delinquency_is_relative_to_the_visit_date() {
        let now = Utc::now();
        let mut ledger = BillLedger::new();

        // A visit 61 days back is past the window
        let overdue = ledger
            .create_bill(VisitId::new(), now - Duration::days(61), &[])
            .unwrap();
        assert_eq!(
            ledger.status(overdue, now).unwrap(),
            BillStatus::Delinquent
        );

        // A visit 59 days back is still inside it
        let recent = ledger
            .create_bill(VisitId::new(), now - Duration::days(59), &[])
            .unwrap();
        assert_eq!(ledger.status(recent, now).unwrap(), BillStatus::Unpaid);
    }

    /// Tests that payoff ends delinquency permanently
    #[test]
    fn test_paid_status_wins_over_any_age() {
        let mut catalog = CptCodeCatalog::new();
        catalog
            .add(CptCodeDraft::new(99202, "Outpatient visit", 7500))
            .unwrap();
        let attached = vec![catalog.find_active(99202).unwrap().clone()];

        let now = Utc::now();
        let mut ledger = BillLedger::new();
        let bill_id = ledger
            .create_bill(VisitId::new(), now - Duration::days(200), &attached)
            .unwrap();

        assert_eq!(
            ledger.status(bill_id, now).unwrap(),
            BillStatus::Delinquent
        );

        let payoff = Payment::new(Money::from_minor(7500), now, PaymentMethod::Insurance).unwrap();
        ledger.add_payment(bill_id, payoff).unwrap();

        assert_eq!(ledger.status(bill_id, now).unwrap(), BillStatus::Paid);
    }
}

mod catalog_lifecycle_scenarios {
    use super::*;

    /// Tests the revision lifecycle through archival
    #[test]
    fn test_revise_then_archive_then_number_stays_taken() {
        let mut catalog = CptCodeCatalog::new();

        // 1. Add the code at version 1
        let added = catalog
            .add(CptCodeDraft::new(99202, "Outpatient visit", 7500).with_time_range(15, 29))
            .unwrap();
        assert_eq!(added.version, 1);

        // 2. Reprice it; the version advances
        let revised = catalog
            .revise(99202, CptCodeDraft::new(99202, "Outpatient visit", 8000))
            .unwrap();
        assert_eq!(revised.version, 2);

        // 3. Retire it; revision is now forbidden
        catalog.archive(99202).unwrap();
        assert!(matches!(
            catalog.revise(99202, CptCodeDraft::new(99202, "Outpatient visit", 9000)),
            Err(CatalogError::ArchivedRecord(99202))
        ));

        // 4. The number can never be reused, even though the record is archived
        assert!(matches!(
            catalog.add(CptCodeDraft::new(99202, "New service", 100)),
            Err(CatalogError::DuplicateCode(99202))
        ));
    }

    /// Tests that archived codes drop out of billing resolution
    #[test]
    fn test_archived_code_is_not_resolvable_for_new_bills() {
        let mut catalog = CptCodeCatalog::new();
        catalog
            .add(CptCodeDraft::new(90658, "Influenza vaccination", 2500))
            .unwrap();
        catalog.archive(90658).unwrap();

        // Resolution for a new encounter fails; the record stays reachable
        // for historical display.
        assert!(matches!(
            catalog.find_active(90658),
            Err(CatalogError::NotFound(90658))
        ));
        assert!(catalog.get(90658).unwrap().is_archived);
    }
}
