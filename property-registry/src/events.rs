use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

pub enum RegistryEvent {
    Mint(u64, Address),
    Approval(u64, Address, Address),
    Transfer(u64, Address, Address),
}

impl RegistryEvent {
    pub fn name(&self) -> &'static str {
        match self {
            RegistryEvent::Mint(..) => stringify!(Mint),
            RegistryEvent::Approval(..) => stringify!(Approval),
            RegistryEvent::Transfer(..) => stringify!(Transfer),
        }
    }

    pub fn data(&self, env: &Env) -> Vec<Val> {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            RegistryEvent::Mint(token_id, owner) => {
                v.push_back(token_id.into_val(env));
                v.push_back(owner.into_val(env));
            }
            RegistryEvent::Approval(token_id, owner, spender) => {
                v.push_back(token_id.into_val(env));
                v.push_back(owner.into_val(env));
                v.push_back(spender.into_val(env));
            }
            RegistryEvent::Transfer(token_id, from, to) => {
                v.push_back(token_id.into_val(env));
                v.push_back(from.into_val(env));
                v.push_back(to.into_val(env));
            }
        }

        v
    }

    pub fn publish(&self, env: &Env) {
        env.events().publish((self.name(),), self.data(env))
    }
}
