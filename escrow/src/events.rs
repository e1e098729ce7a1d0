use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum EscrowEvent {
    Initialized(Address, Address, Address, Address),
    Listed(u64, Address, i128, i128),
    EarnestDeposited(u64, Address, i128),
    PurchaseFunded(u64, Address, i128),
    InspectionUpdated(u64, bool),
    SaleApproved(u64, Address),
    SaleFinalized(u64, Address, i128),
    SaleCancelled(u64, Address, i128),
    FundingReturned(u64, Address, i128),
    CustodyReturned(u64, Address),
}

impl EscrowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            EscrowEvent::Initialized(..) => stringify!(Initialized),
            EscrowEvent::Listed(..) => stringify!(Listed),
            EscrowEvent::EarnestDeposited(..) => stringify!(EarnestDeposited),
            EscrowEvent::PurchaseFunded(..) => stringify!(PurchaseFunded),
            EscrowEvent::InspectionUpdated(..) => stringify!(InspectionUpdated),
            EscrowEvent::SaleApproved(..) => stringify!(SaleApproved),
            EscrowEvent::SaleFinalized(..) => stringify!(SaleFinalized),
            EscrowEvent::SaleCancelled(..) => stringify!(SaleCancelled),
            EscrowEvent::FundingReturned(..) => stringify!(FundingReturned),
            EscrowEvent::CustodyReturned(..) => stringify!(CustodyReturned),
        }
    }

    pub fn data(&self, env: &Env) -> Vec<Val> {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            EscrowEvent::Initialized(registry, seller, inspector, lender) => {
                v.push_back(registry.into_val(env));
                v.push_back(seller.into_val(env));
                v.push_back(inspector.into_val(env));
                v.push_back(lender.into_val(env));
            }
            EscrowEvent::Listed(id, buyer, purchase_price, escrow_amount) => {
                v.push_back(id.into_val(env));
                v.push_back(buyer.into_val(env));
                v.push_back(purchase_price.into_val(env));
                v.push_back(escrow_amount.into_val(env));
            }
            EscrowEvent::EarnestDeposited(id, from, amount)
            | EscrowEvent::PurchaseFunded(id, from, amount) => {
                v.push_back(id.into_val(env));
                v.push_back(from.into_val(env));
                v.push_back(amount.into_val(env));
            }
            EscrowEvent::InspectionUpdated(id, passed) => {
                v.push_back(id.into_val(env));
                v.push_back(passed.into_val(env));
            }
            EscrowEvent::SaleApproved(id, approver) => {
                v.push_back(id.into_val(env));
                v.push_back(approver.into_val(env));
            }
            EscrowEvent::SaleFinalized(id, buyer, purchase_price) => {
                v.push_back(id.into_val(env));
                v.push_back(buyer.into_val(env));
                v.push_back(purchase_price.into_val(env));
            }
            // Recipient is the buyer on refund, the seller on forfeit
            EscrowEvent::SaleCancelled(id, recipient, amount)
            | EscrowEvent::FundingReturned(id, recipient, amount) => {
                v.push_back(id.into_val(env));
                v.push_back(recipient.into_val(env));
                v.push_back(amount.into_val(env));
            }
            EscrowEvent::CustodyReturned(id, seller) => {
                v.push_back(id.into_val(env));
                v.push_back(seller.into_val(env));
            }
        }

        v
    }

    pub fn publish(&self, env: &Env) {
        env.events().publish((self.name(),), self.data(env))
    }
}
