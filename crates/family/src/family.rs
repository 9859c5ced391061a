use kinship_core::{DomainError, DomainResult, Entity};
use kinship_people::SharedPerson;

/// Hours assumed when totalling a household's hourly income.
pub const HOUSEHOLD_HOURS: i64 = 2000;

/// A family can only grow if some member is older than this.
pub const CHILD_BEARING_AGE: u32 = 21;

/// An ordered household: the founding couple first, then children.
#[derive(Debug, Default)]
pub struct Family {
    members: Vec<SharedPerson>,
}

impl Family {
    /// Found a family from two unmarried people, linking them as spouses.
    ///
    /// If either one already has a spouse, the family is left empty and no
    /// links change. Each side of the link is still subject to the marriage
    /// age gate.
    pub fn new(first: &SharedPerson, second: &SharedPerson) -> Self {
        Self::try_new(first, second).unwrap_or_default()
    }

    /// Like [`new`](Self::new), but an already-married participant is an error.
    pub fn try_new(first: &SharedPerson, second: &SharedPerson) -> DomainResult<Self> {
        for person in [first, second] {
            let person = person.borrow();
            if person.has_spouse() {
                tracing::debug!(person = %person.id(), "family rejected; already married");
                return Err(DomainError::conflict(format!(
                    "{} ({}) is already married",
                    person.first_name(),
                    person.id()
                )));
            }
        }

        first.borrow_mut().set_spouse(Some(second));
        second.borrow_mut().set_spouse(Some(first));

        Ok(Self {
            members: vec![first.clone(), second.clone()],
        })
    }

    pub fn members(&self) -> &[SharedPerson] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Add a child if some member is older than [`CHILD_BEARING_AGE`].
    ///
    /// Returns whether the child was added.
    pub fn have_child(&mut self, child: SharedPerson) -> bool {
        let eligible = self
            .members
            .iter()
            .any(|member| member.borrow().age() > CHILD_BEARING_AGE);

        if !eligible {
            tracing::debug!(members = self.members.len(), "no member old enough; child not added");
            return false;
        }

        self.members.push(child);
        true
    }

    /// Sum of every member's income over [`HOUSEHOLD_HOURS`]; jobless members
    /// count as zero.
    pub fn household_income(&self) -> i64 {
        self.members
            .iter()
            .map(|member| {
                member
                    .borrow()
                    .job()
                    .map_or(0, |job| job.calculate_income(HOUSEHOLD_HOURS))
            })
            .fold(0i64, i64::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinship_jobs::Job;
    use kinship_people::Person;
    use proptest::prelude::*;
    use std::rc::Rc;

    fn couple() -> (SharedPerson, SharedPerson) {
        (
            Person::shared("Ted", "Neward", 45),
            Person::shared("Charlotte", "Neward", 45),
        )
    }

    #[test]
    fn founding_links_spouses_and_orders_members() {
        let (ted, charlotte) = couple();
        let family = Family::new(&ted, &charlotte);

        assert_eq!(family.len(), 2);
        assert!(Rc::ptr_eq(&family.members()[0], &ted));
        assert!(Rc::ptr_eq(&family.members()[1], &charlotte));

        let teds_spouse = ted.borrow().spouse().unwrap();
        let charlottes_spouse = charlotte.borrow().spouse().unwrap();
        assert!(Rc::ptr_eq(&teds_spouse, &charlotte));
        assert!(Rc::ptr_eq(&charlottes_spouse, &ted));
    }

    #[test]
    fn already_married_participant_yields_empty_family() {
        let (ted, charlotte) = couple();
        let other = Person::shared("Tom", "Jones", 30);
        ted.borrow_mut().set_spouse(Some(&other));

        let family = Family::new(&ted, &charlotte);

        assert!(family.is_empty());
        let teds_spouse = ted.borrow().spouse().unwrap();
        assert!(Rc::ptr_eq(&teds_spouse, &other));
        assert!(!charlotte.borrow().has_spouse());
    }

    #[test]
    fn try_new_reports_conflict() {
        let (ted, charlotte) = couple();
        let other = Person::shared("Tom", "Jones", 30);
        charlotte.borrow_mut().set_spouse(Some(&other));

        let err = Family::try_new(&ted, &charlotte).unwrap_err();
        match err {
            DomainError::Conflict(msg) => assert!(msg.contains("Charlotte")),
            _ => panic!("Expected Conflict error for already married participant"),
        }
        assert!(!ted.borrow().has_spouse());
    }

    #[test]
    fn minor_side_of_link_does_not_take() {
        let adult = Person::shared("Ted", "Neward", 45);
        let minor = Person::shared("Abbie", "Smith", 17);

        let family = Family::new(&adult, &minor);

        assert_eq!(family.len(), 2);
        assert!(adult.borrow().has_spouse());
        assert!(!minor.borrow().has_spouse());
    }

    #[test]
    fn have_child_appends_once_when_a_member_is_old_enough() {
        let parent = Person::shared("Ted", "Neward", 25);
        let young = Person::shared("Abbie", "Smith", 10);
        let mut family = Family::new(&parent, &young);
        let child = Person::shared("Mike", "Neward", 0);

        assert!(family.have_child(child.clone()));
        assert_eq!(family.len(), 3);
        assert!(Rc::ptr_eq(&family.members()[2], &child));
    }

    #[test]
    fn have_child_fails_when_nobody_is_over_twenty_one() {
        let a = Person::shared("Ann", "Lee", 21);
        let b = Person::shared("Bob", "Lee", 20);
        let mut family = Family::new(&a, &b);

        assert!(!family.have_child(Person::shared("Cal", "Lee", 0)));
        assert_eq!(family.len(), 2);
    }

    #[test]
    fn empty_family_cannot_have_children() {
        let mut family = Family::default();
        assert!(!family.have_child(Person::shared("Cal", "Lee", 0)));
        assert!(family.is_empty());
    }

    #[test]
    fn household_income_skips_jobless_members() {
        let (ted, charlotte) = couple();
        ted.borrow_mut().set_job(Some(Job::salaried("Guest Lecturer", 1000)));
        let family = Family::new(&ted, &charlotte);

        assert_eq!(family.household_income(), 1000);
    }

    #[test]
    fn household_income_uses_fixed_hours() {
        let (ted, charlotte) = couple();
        ted.borrow_mut().set_job(Some(Job::salaried("Guest Lecturer", 1000)));
        charlotte.borrow_mut().set_job(Some(Job::hourly("Consultant", 10.5)));
        let family = Family::new(&ted, &charlotte);

        assert_eq!(family.household_income(), 1000 + 21000);
    }

    #[test]
    fn household_income_reflects_raises_after_founding() {
        let (ted, charlotte) = couple();
        ted.borrow_mut().set_job(Some(Job::salaried("Guest Lecturer", 1000)));
        let family = Family::new(&ted, &charlotte);

        if let Some(job) = ted.borrow_mut().job_mut() {
            job.raise_by_amount(500);
        }

        assert_eq!(family.household_income(), 1500);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a child is added exactly when some member is over 21.
        #[test]
        fn have_child_iff_some_member_over_twenty_one(
            first_age in 0u32..60,
            second_age in 0u32..60
        ) {
            let a = Person::shared("A", "X", first_age);
            let b = Person::shared("B", "X", second_age);
            let mut family = Family::new(&a, &b);

            let added = family.have_child(Person::shared("C", "X", 0));
            let expected = first_age > CHILD_BEARING_AGE || second_age > CHILD_BEARING_AGE;

            prop_assert_eq!(added, expected);
            prop_assert_eq!(family.len(), if expected { 3 } else { 2 });
        }
    }
}
